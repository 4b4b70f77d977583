//! PokéAPI HTTP client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{Ability, EvolutionChain, Pokemon, PokemonPage, Species, SpeciesChainRef, TypeInfo};

/// Client for the PokéAPI REST service.
///
/// Every call is a single GET. Idle connections are not kept, so each
/// request opens and releases its own connection.
#[derive(Clone)]
pub struct PokeApiClient {
    http: Client,
    config: ApiConfig,
}

impl PokeApiClient {
    /// Build a client for the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self { http, config })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch an endpoint and decode its JSON body into `T`.
    ///
    /// `endpoint` is either relative to the base URL or an absolute URL.
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint_url(endpoint)?;
        debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch an endpoint as an untyped JSON document.
    pub async fn fetch_document(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.fetch_json(endpoint).await
    }

    /// Look up a Pokémon by name or national dex number.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        self.fetch_json(&format!("pokemon/{}", path_segment(name)))
            .await
    }

    /// Fetch one page of the Pokémon index.
    pub async fn pokemon_page(&self, limit: u64, offset: u64) -> Result<PokemonPage, ApiError> {
        self.fetch_json(&format!("pokemon?limit={}&offset={}", limit, offset))
            .await
    }

    /// Look up an ability by name or id.
    pub async fn ability(&self, name: &str) -> Result<Ability, ApiError> {
        self.fetch_json(&format!("ability/{}", path_segment(name)))
            .await
    }

    /// Look up a type by name or id.
    pub async fn pokemon_type(&self, id_or_name: &str) -> Result<TypeInfo, ApiError> {
        self.fetch_json(&format!("type/{}", path_segment(id_or_name)))
            .await
    }

    /// Look up a species by name or id.
    pub async fn species(&self, name: &str) -> Result<Species, ApiError> {
        self.fetch_json(&format!("pokemon-species/{}", path_segment(name)))
            .await
    }

    /// Look up the evolution chain link of a species.
    pub async fn species_chain_ref(&self, name: &str) -> Result<SpeciesChainRef, ApiError> {
        self.fetch_json(&format!("pokemon-species/{}", path_segment(name)))
            .await
    }

    /// Fetch an evolution chain by the absolute URL a species document points at.
    pub async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError> {
        self.fetch_json(url).await
    }
}

/// Normalize user input into a single path segment.
///
/// Names are case-insensitive upstream but only lower-case ones resolve.
pub fn path_segment(input: &str) -> String {
    urlencoding::encode(&input.trim().to_lowercase()).into_owned()
}
