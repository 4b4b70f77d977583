//! Species details.

use async_trait::async_trait;
use pokeapi::{PokeApiClient, Species};
use serde_json::Value;
use tracing::debug;

use super::{log_lookup_failure, required_name, single_param_schema};
use crate::error::ToolError;
use crate::labels::Locale;
use crate::text::title_case;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Looks up a species: color, shape, habitat and legendary/mythical status.
///
/// # Parameters
///
/// - `name` (required): Species name, e.g. "mewtwo".
pub struct GetSpecies {
    client: PokeApiClient,
    locale: Locale,
}

impl GetSpecies {
    /// Create a new species lookup tool.
    pub fn new(client: PokeApiClient, locale: Locale) -> Self {
        Self { client, locale }
    }

    pub fn render(locale: Locale, species: &Species) -> String {
        let labels = locale.labels();
        let habitat = species
            .habitat
            .as_ref()
            .map(|h| h.name.as_str())
            .unwrap_or(labels.unknown);

        format!(
            "{}\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}",
            locale.species_heading(&title_case(&species.name)),
            labels.color,
            species.color.name,
            labels.shape,
            species.shape.name,
            labels.habitat,
            habitat,
            labels.legendary,
            locale.yes_no(species.is_legendary),
            labels.mythical,
            locale.yes_no(species.is_mythical)
        )
    }
}

#[async_trait]
impl Tool for GetSpecies {
    fn name(&self) -> &str {
        "get_species"
    }

    fn description(&self) -> &str {
        "Returns species information for a Pokémon: color, shape, habitat, and whether it is legendary or mythical."
    }

    fn parameters(&self) -> Value {
        single_param_schema("name", "Pokémon species name, e.g. 'mewtwo'")
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let name = required_name(&args, "name")?;
        debug!("Looking up species: {}", name);

        match self.client.species(&name).await {
            Ok(species) => Ok(ToolOutput::success(Self::render(self.locale, &species))),
            Err(e) => {
                log_lookup_failure(self.name(), &name, &e);
                Ok(ToolOutput::success(self.locale.species_not_found(&name)))
            }
        }
    }
}
