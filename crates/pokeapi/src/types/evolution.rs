//! Evolution chain document.

use serde::{Deserialize, Serialize};

use super::common::NamedResource;

/// `GET evolution-chain/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One stage of an evolution chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl EvolutionChain {
    /// Species names from the base stage onwards, following only the first
    /// branch at every stage.
    pub fn first_branch(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut link = Some(&self.chain);
        while let Some(current) = link {
            names.push(current.species.name.as_str());
            link = current.evolves_to.first();
        }
        names
    }
}
