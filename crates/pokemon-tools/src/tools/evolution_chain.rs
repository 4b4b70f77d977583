//! Evolution chain traversal.

use async_trait::async_trait;
use pokeapi::{EvolutionChain, PokeApiClient};
use serde_json::Value;
use tracing::{debug, warn};

use super::{log_lookup_failure, required_name, single_param_schema};
use crate::error::ToolError;
use crate::labels::Locale;
use crate::text::title_case;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Separator placed between evolution stages.
pub const STAGE_SEPARATOR: &str = " → ";

/// Reports the evolution line a species belongs to.
///
/// Two sequential requests: the species document, then the evolution chain
/// it links to. Branching chains are reduced to their first branch.
///
/// # Parameters
///
/// - `name` (required): Species name, e.g. "charmander".
pub struct GetEvolutionChain {
    client: PokeApiClient,
    locale: Locale,
}

impl GetEvolutionChain {
    /// Create a new evolution chain tool.
    pub fn new(client: PokeApiClient, locale: Locale) -> Self {
        Self { client, locale }
    }

    pub fn render(chain: &EvolutionChain) -> String {
        chain
            .first_branch()
            .into_iter()
            .map(title_case)
            .collect::<Vec<_>>()
            .join(STAGE_SEPARATOR)
    }
}

#[async_trait]
impl Tool for GetEvolutionChain {
    fn name(&self) -> &str {
        "get_evolution_chain"
    }

    fn description(&self) -> &str {
        "Returns the evolution chain of a Pokémon, following the first branch at each stage."
    }

    fn parameters(&self) -> Value {
        single_param_schema("name", "Pokémon species name, e.g. 'charmander'")
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let name = required_name(&args, "name")?;
        debug!("Looking up evolution chain for: {}", name);

        let link = match self.client.species_chain_ref(&name).await {
            Ok(link) => link,
            Err(e) => {
                log_lookup_failure(self.name(), &name, &e);
                return Ok(ToolOutput::success(self.locale.evolution_not_found(&name)));
            }
        };

        match self.client.evolution_chain(&link.evolution_chain.url).await {
            Ok(chain) => Ok(ToolOutput::success(Self::render(&chain))),
            Err(e) => {
                warn!(
                    "{}: chain {} for '{}' failed: {}",
                    self.name(),
                    link.evolution_chain.url,
                    name,
                    e
                );
                Ok(ToolOutput::success(self.locale.labels().evolution_fetch_failed))
            }
        }
    }
}
