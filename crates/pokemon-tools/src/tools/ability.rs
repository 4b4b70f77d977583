//! Ability details.

use async_trait::async_trait;
use pokeapi::{Ability, PokeApiClient};
use serde_json::Value;
use tracing::debug;

use super::{log_lookup_failure, required_name, single_param_schema};
use crate::error::ToolError;
use crate::labels::Locale;
use crate::text::title_case;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Effect entries are read in this language regardless of locale.
const EFFECT_LANGUAGE: &str = "en";

/// Looks up an ability and reports its English effect text.
///
/// # Parameters
///
/// - `name` (required): Ability name or id, e.g. "static".
pub struct GetAbility {
    client: PokeApiClient,
    locale: Locale,
}

impl GetAbility {
    /// Create a new ability lookup tool.
    pub fn new(client: PokeApiClient, locale: Locale) -> Self {
        Self { client, locale }
    }

    pub fn render(locale: Locale, ability: &Ability) -> String {
        let labels = locale.labels();
        let effect = ability
            .effect_in(EFFECT_LANGUAGE)
            .unwrap_or(labels.no_english_effect);

        format!(
            "{}: {}\n{}: {}",
            labels.ability,
            title_case(&ability.name),
            labels.effect,
            effect
        )
    }
}

#[async_trait]
impl Tool for GetAbility {
    fn name(&self) -> &str {
        "get_ability"
    }

    fn description(&self) -> &str {
        "Gets information about a Pokémon ability, including its effect description."
    }

    fn parameters(&self) -> Value {
        single_param_schema("name", "Ability name, e.g. 'static' or 'lightning-rod'")
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let name = required_name(&args, "name")?;
        debug!("Looking up ability: {}", name);

        match self.client.ability(&name).await {
            Ok(ability) => Ok(ToolOutput::success(Self::render(self.locale, &ability))),
            Err(e) => {
                log_lookup_failure(self.name(), &name, &e);
                Ok(ToolOutput::success(self.locale.ability_not_found(&name)))
            }
        }
    }
}
