//! PokéAPI client library.
//!
//! This crate provides a small async client for the public PokéAPI v2
//! service. It supports:
//!
//! - Fetching any endpoint as raw JSON or a typed document
//! - Typed lookups for Pokémon, abilities, types, species and evolution chains
//! - A configurable base URL and timeout, so tests can point at a mock server
//!
//! # Example
//!
//! ```no_run
//! use pokeapi::{ApiConfig, PokeApiClient};
//!
//! # async fn example() -> Result<(), pokeapi::ApiError> {
//! let client = PokeApiClient::new(ApiConfig::default())?;
//!
//! let pikachu = client.pokemon("pikachu").await?;
//! println!("{} weighs {} kg", pikachu.name, pikachu.weight_kg());
//!
//! let chain_ref = client.species_chain_ref("pikachu").await?;
//! let chain = client.evolution_chain(&chain_ref.evolution_chain.url).await?;
//! println!("{}", chain.first_branch().join(" -> "));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{path_segment, PokeApiClient};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use types::*;
