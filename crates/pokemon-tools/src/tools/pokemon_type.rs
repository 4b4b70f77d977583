//! Type damage relations.

use async_trait::async_trait;
use pokeapi::{NamedResource, PokeApiClient, TypeInfo};
use serde_json::{json, Value};
use tracing::debug;

use super::{log_lookup_failure, required_name};
use crate::error::ToolError;
use crate::labels::Locale;
use crate::text::{join_or, title_case};
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Looks up a type by name or id and reports its damage relations.
///
/// # Parameters
///
/// - `type_id_or_name` (required): Type name ("fire") or numeric id (10).
pub struct GetType {
    client: PokeApiClient,
    locale: Locale,
}

impl GetType {
    /// Create a new type lookup tool.
    pub fn new(client: PokeApiClient, locale: Locale) -> Self {
        Self { client, locale }
    }

    pub fn render(locale: Locale, info: &TypeInfo) -> String {
        let labels = locale.labels();
        let relations = &info.damage_relations;
        let names = |list: &[NamedResource]| join_or(list.iter().map(|t| t.name.as_str()), labels.none);

        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}",
            labels.kind,
            title_case(&info.name),
            labels.double_damage_from,
            names(&relations.double_damage_from),
            labels.double_damage_to,
            names(&relations.double_damage_to),
            labels.half_damage_from,
            names(&relations.half_damage_from),
            labels.half_damage_to,
            names(&relations.half_damage_to)
        )
    }
}

#[async_trait]
impl Tool for GetType {
    fn name(&self) -> &str {
        "get_type"
    }

    fn description(&self) -> &str {
        "Gets the damage relations of a Pokémon type by name or numeric id."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "type_id_or_name": {
                    "type": ["string", "integer"],
                    "description": "Type name such as 'fire', or its numeric id"
                }
            },
            "required": ["type_id_or_name"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let id_or_name = required_name(&args, "type_id_or_name")?;
        debug!("Looking up type: {}", id_or_name);

        match self.client.pokemon_type(&id_or_name).await {
            Ok(info) => Ok(ToolOutput::success(Self::render(self.locale, &info))),
            Err(e) => {
                log_lookup_failure(self.name(), &id_or_name, &e);
                Ok(ToolOutput::success(self.locale.type_not_found(&id_or_name)))
            }
        }
    }
}
