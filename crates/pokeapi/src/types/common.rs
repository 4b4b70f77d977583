//! Reference types shared across endpoints.

use serde::{Deserialize, Serialize};

/// A named link to another resource (`{"name": ..., "url": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, lower-case with hyphens (e.g. "lightning-rod").
    pub name: String,
    /// Absolute URL of the resource.
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Create a reference with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// An unnamed link to another resource (`{"url": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}
