//! Pokémon index listing.

use async_trait::async_trait;
use pokeapi::{PokeApiClient, PokemonPage};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::labels::Locale;
use crate::text::title_case;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Number of entries returned when no limit is given.
const DEFAULT_LIMIT: u64 = 10;

/// Lists Pokémon names from the start of the national index.
///
/// # Parameters
///
/// - `limit` (optional, default 10): How many names to return.
pub struct GetPokemonList {
    client: PokeApiClient,
    locale: Locale,
}

impl GetPokemonList {
    /// Create a new listing tool.
    pub fn new(client: PokeApiClient, locale: Locale) -> Self {
        Self { client, locale }
    }

    /// One title-cased name per line, in upstream order.
    pub fn render(page: &PokemonPage) -> String {
        page.results
            .iter()
            .map(|p| title_case(&p.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl Tool for GetPokemonList {
    fn name(&self) -> &str {
        "get_pokemon_list"
    }

    fn description(&self) -> &str {
        "Returns a list of Pokémon names from the start of the national index, one per line."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "How many Pokémon to list",
                    "minimum": 1,
                    "default": DEFAULT_LIMIT
                }
            }
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let limit = args.get_u64_or("limit", DEFAULT_LIMIT)?;
        if limit == 0 {
            return Err(ToolError::InvalidParameter {
                name: "limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        debug!("Listing {} Pokémon", limit);

        match self.client.pokemon_page(limit, 0).await {
            Ok(page) => Ok(ToolOutput::success(Self::render(&page))),
            Err(e) => {
                warn!("{}: listing failed: {}", self.name(), e);
                Ok(ToolOutput::success(self.locale.labels().list_failed))
            }
        }
    }
}
