//! Command line and environment configuration.

use clap::Parser;
use pokeapi::{config::parse_timeout_secs, ApiConfig, DEFAULT_BASE_URL};
use pokemon_tools::Locale;

use crate::error::ServerError;

/// Command line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "pokemon-mcp")]
#[command(about = "MCP server exposing PokéAPI lookups as tools over stdio")]
pub struct Args {
    /// PokéAPI base URL. Falls back to POKEAPI_BASE_URL env.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds. Falls back to POKEAPI_TIMEOUT_SECS env (default: 20).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Label language, "en" or "es". Falls back to POKEMON_LOCALE env (default: en).
    #[arg(long)]
    pub locale: Option<String>,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api: ApiConfig,
    pub locale: Locale,
}

impl ServerConfig {
    /// Resolve configuration: command line first, then `env`, then defaults.
    pub fn from_args<F>(args: &Args, env: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = args
            .base_url
            .clone()
            .or_else(|| env("POKEAPI_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut api = ApiConfig::new(base_url);
        // Reject bad URLs at startup rather than on the first call.
        api.endpoint_url("")?;

        match (args.timeout_secs, env("POKEAPI_TIMEOUT_SECS")) {
            (Some(secs), _) => api.timeout = parse_timeout_secs(&secs.to_string())?,
            (None, Some(raw)) => api.timeout = parse_timeout_secs(&raw)?,
            (None, None) => {}
        }

        let locale = match args.locale.clone().or_else(|| env("POKEMON_LOCALE")) {
            Some(code) => code
                .parse::<Locale>()
                .map_err(|e| ServerError::Config(e.to_string()))?,
            None => Locale::default(),
        };

        Ok(Self { api, locale })
    }
}
