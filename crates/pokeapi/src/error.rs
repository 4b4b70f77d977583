//! Error types for the PokéAPI client.

use thiserror::Error;

/// Errors that can occur when fetching from the upstream service.
///
/// Tool callers treat every variant the same way; the detail is kept for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON document.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Endpoint could not be resolved to a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether the upstream reported that the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
