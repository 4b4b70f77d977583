//! Built-in tool implementations.

mod ability;
mod evolution_chain;
mod pokemon;
mod pokemon_list;
mod pokemon_type;
mod species;

pub use ability::GetAbility;
pub use evolution_chain::GetEvolutionChain;
pub use pokemon::GetPokemon;
pub use pokemon_list::GetPokemonList;
pub use pokemon_type::GetType;
pub use species::GetSpecies;

use pokeapi::ApiError;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::tool::ToolArgs;

/// Read a required, non-blank string parameter.
fn required_name(args: &ToolArgs, key: &str) -> Result<String, ToolError> {
    let value = args.get_identifier(key)?;
    if value.trim().is_empty() {
        return Err(ToolError::InvalidParameter {
            name: key.to_string(),
            reason: "cannot be empty".to_string(),
        });
    }
    Ok(value)
}

/// Schema for tools that take a single name-like parameter.
fn single_param_schema(key: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            key: {
                "type": "string",
                "description": description
            }
        },
        "required": [key]
    })
}

/// Record why a lookup fell back to placeholder text.
fn log_lookup_failure(tool: &str, subject: &str, err: &ApiError) {
    if err.is_not_found() {
        debug!("{}: '{}' not found upstream", tool, subject);
    } else {
        warn!("{}: lookup for '{}' failed: {}", tool, subject, err);
    }
}
