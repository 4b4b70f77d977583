//! Ability document.

use serde::{Deserialize, Serialize};

use super::common::NamedResource;

/// `GET ability/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

impl Ability {
    /// First effect text written in the given language, if any.
    pub fn effect_in(&self, language: &str) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.effect.as_str())
    }
}

/// Localized effect description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectEntry {
    pub effect: String,
    pub language: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_effect_in_picks_first_match() {
        let ability: Ability = serde_json::from_value(json!({
            "name": "static",
            "effect_entries": [
                {"effect": "Paralyse au contact.", "language": {"name": "fr"}},
                {"effect": "May paralyze on contact.", "language": {"name": "en"}},
                {"effect": "Second english entry.", "language": {"name": "en"}}
            ]
        }))
        .unwrap();

        assert_eq!(ability.effect_in("en"), Some("May paralyze on contact."));
        assert_eq!(ability.effect_in("ja"), None);
    }

    #[test]
    fn test_effect_entries_default_to_empty() {
        let ability: Ability = serde_json::from_value(json!({"name": "static"})).unwrap();
        assert!(ability.effect_entries.is_empty());
        assert_eq!(ability.effect_in("en"), None);
    }
}
