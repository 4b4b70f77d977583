//! Basic Pokémon information.

use async_trait::async_trait;
use pokeapi::{PokeApiClient, Pokemon};
use serde_json::Value;
use tracing::debug;

use super::{log_lookup_failure, required_name, single_param_schema};
use crate::error::ToolError;
use crate::labels::Locale;
use crate::text::title_case;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Looks up a Pokémon and reports its types, abilities and weight.
///
/// # Parameters
///
/// - `name` (required): Pokémon name or national dex number.
///
/// # Examples
///
/// ```json
/// {"name": "pikachu"}
/// {"name": "Mr-Mime"}
/// ```
pub struct GetPokemon {
    client: PokeApiClient,
    locale: Locale,
}

impl GetPokemon {
    /// Create a new Pokémon lookup tool.
    pub fn new(client: PokeApiClient, locale: Locale) -> Self {
        Self { client, locale }
    }

    /// Render a Pokémon document. Weight is reported in kilograms.
    pub fn render(locale: Locale, pokemon: &Pokemon) -> String {
        let labels = locale.labels();
        let types = pokemon.type_names().join(", ");
        let abilities = pokemon.ability_names().join(", ");

        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {:.1} kg",
            labels.name,
            title_case(&pokemon.name),
            labels.types,
            title_case(&types),
            labels.abilities,
            title_case(&abilities),
            labels.weight,
            pokemon.weight_kg()
        )
    }
}

#[async_trait]
impl Tool for GetPokemon {
    fn name(&self) -> &str {
        "get_pokemon"
    }

    fn description(&self) -> &str {
        "Gets basic information about a Pokémon by name: types, abilities and weight."
    }

    fn parameters(&self) -> Value {
        single_param_schema("name", "Pokémon name or national dex number, e.g. 'pikachu'")
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let name = required_name(&args, "name")?;
        debug!("Looking up Pokémon: {}", name);

        match self.client.pokemon(&name).await {
            Ok(pokemon) => Ok(ToolOutput::success(Self::render(self.locale, &pokemon))),
            Err(e) => {
                log_lookup_failure(self.name(), &name, &e);
                Ok(ToolOutput::success(self.locale.pokemon_not_found(&name)))
            }
        }
    }
}
