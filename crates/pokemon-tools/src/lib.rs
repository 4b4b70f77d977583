//! Tool registry and PokéAPI-backed tools for the Pokémon MCP server.
//!
//! This crate provides a `ToolRegistry` for registering and executing tools
//! that a host runtime can call. Each tool performs one lookup against
//! PokéAPI (two for the evolution chain) and renders a short text block.
//!
//! # Failure model
//!
//! A tool never fails because of the upstream service. Unknown names,
//! network errors, timeouts and malformed responses all render the tool's
//! placeholder text naming what was asked for. [`ToolError`] only reports
//! problems with the arguments themselves.
//!
//! # Built-in Tools
//!
//! - [`GetPokemon`] - Types, abilities and weight (kg) of a Pokémon.
//! - [`GetPokemonList`] - Names from the start of the national index.
//! - [`GetAbility`] - English effect text of an ability.
//! - [`GetType`] - Damage relations of a type.
//! - [`GetSpecies`] - Color, shape, habitat and legendary/mythical status.
//! - [`GetEvolutionChain`] - Evolution line, first branch only.
//!
//! # Example
//!
//! ```rust,ignore
//! use pokeapi::{ApiConfig, PokeApiClient};
//! use pokemon_tools::{default_registry, Locale};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PokeApiClient::new(ApiConfig::default()).unwrap();
//!     let registry = default_registry(client, Locale::English);
//!
//!     let result = registry
//!         .execute_json("get_pokemon", r#"{"name": "pikachu"}"#)
//!         .await
//!         .unwrap();
//!     println!("{}", result.content);
//! }
//! ```

mod error;
mod labels;
mod registry;
mod text;
mod tool;
pub mod tools;

pub use error::ToolError;
pub use labels::{Labels, Locale, UnknownLocale};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolDefinition, ToolOutput};
pub use tools::{
    GetAbility, GetEvolutionChain, GetPokemon, GetPokemonList, GetSpecies, GetType,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

use pokeapi::PokeApiClient;

/// Create a new registry with all built-in tools registered.
///
/// Every tool shares the same client.
pub fn default_registry(client: PokeApiClient, locale: Locale) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(GetPokemon::new(client.clone(), locale));
    registry.register(GetPokemonList::new(client.clone(), locale));
    registry.register(GetAbility::new(client.clone(), locale));
    registry.register(GetType::new(client.clone(), locale));
    registry.register(GetSpecies::new(client.clone(), locale));
    registry.register(GetEvolutionChain::new(client, locale));

    registry
}
