//! Response documents returned by PokéAPI.
//!
//! Only the fields the tools read are modelled. A missing required field
//! fails decoding, which callers treat like any other failed lookup.

mod ability;
mod common;
mod evolution;
mod pokemon;
mod pokemon_type;
mod species;

pub use ability::{Ability, EffectEntry};
pub use common::{ApiResource, NamedResource};
pub use evolution::{ChainLink, EvolutionChain};
pub use pokemon::{Pokemon, PokemonAbility, PokemonPage, PokemonType};
pub use pokemon_type::{DamageRelations, TypeInfo};
pub use species::{Species, SpeciesChainRef};
