//! Pokémon and Pokémon list documents.

use serde::{Deserialize, Serialize};

use super::common::NamedResource;

/// `GET pokemon/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<PokemonAbility>,
    /// Weight in hectograms.
    pub weight: u32,
}

impl Pokemon {
    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Ability names in slot order.
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }

    /// Weight converted to kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}

/// Type slot of a Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Ability slot of a Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
}

/// `GET pokemon?limit={n}&offset={m}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    /// Total number of Pokémon upstream.
    #[serde(default)]
    pub count: u64,
    pub results: Vec<NamedResource>,
}
