//! PokéAPI MCP server over stdio.
//!
//! Stdout carries protocol traffic only; logs go to stderr.

use std::env;

use clap::Parser;
use pokeapi::PokeApiClient;
use pokemon_mcp::{Args, McpServer, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let config = ServerConfig::from_args(&args, |key| env::var(key).ok())?;

    info!(
        "Starting pokemon-mcp v{} (api: {}, locale: {})",
        env!("CARGO_PKG_VERSION"),
        config.api.base_url,
        config.locale
    );

    let client = PokeApiClient::new(config.api)?;
    let registry = pokemon_tools::default_registry(client, config.locale);
    info!("Registered tools: {}", registry.list_tools().join(", "));

    McpServer::new(registry).run_stdio().await?;
    Ok(())
}
