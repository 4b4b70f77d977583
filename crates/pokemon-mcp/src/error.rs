//! Error types for the MCP server.

use thiserror::Error;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Reading from or writing to the transport failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Response serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream client could not be configured.
    #[error("API client error: {0}")]
    Api(#[from] pokeapi::ApiError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
