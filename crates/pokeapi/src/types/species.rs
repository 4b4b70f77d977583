//! Species document.

use serde::{Deserialize, Serialize};

use super::common::{ApiResource, NamedResource};

/// `GET pokemon-species/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    /// Absent for species without a recorded habitat.
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    pub color: NamedResource,
    pub shape: NamedResource,
    pub is_legendary: bool,
    pub is_mythical: bool,
}

/// The slice of a species document that links to its evolution chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesChainRef {
    pub name: String,
    pub evolution_chain: ApiResource,
}
