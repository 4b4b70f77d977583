//! Configuration types for the PokéAPI client.

use std::env;
use std::time::Duration;

use crate::error::ApiError;

/// Public PokéAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Per-request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration for connecting to a PokéAPI-compatible service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL that relative endpoints are resolved against.
    /// Always ends with a `/`.
    pub base_url: String,
    /// Timeout for a single request, connect through body.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl ApiConfig {
    /// Create a new configuration with the given base URL and the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("pokemon-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `POKEAPI_BASE_URL` (default: https://pokeapi.co/api/v2/)
    /// - `POKEAPI_TIMEOUT_SECS` (default: 20)
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);

        if let Ok(raw) = env::var("POKEAPI_TIMEOUT_SECS") {
            config.timeout = parse_timeout_secs(&raw)?;
        }

        Ok(config)
    }

    /// Resolve an endpoint against the base URL.
    ///
    /// Absolute `http(s)://` URLs are returned as-is, which is how follow-up
    /// links embedded in responses (e.g. evolution chains) are fetched.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<url::Url, ApiError> {
        let base = url::Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        base.join(endpoint)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Parse a timeout given in whole seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ApiError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::Config(format!("invalid timeout '{}': expected seconds", raw)))?;
    if secs == 0 {
        return Err(ApiError::Config("timeout must be at least one second".to_string()));
    }
    Ok(Duration::from_secs(secs))
}

fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2/");
        assert_eq!(config.timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ApiConfig::new("http://127.0.0.1:9000/api/v2");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v2/");
    }

    #[test]
    fn test_relative_endpoint() {
        let config = ApiConfig::default();
        let url = config.endpoint_url("pokemon/pikachu").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/pikachu");
    }

    #[test]
    fn test_endpoint_with_query() {
        let config = ApiConfig::default();
        let url = config.endpoint_url("pokemon?limit=5&offset=0").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon?limit=5&offset=0");
    }

    #[test]
    fn test_absolute_endpoint_passes_through() {
        let config = ApiConfig::new("http://localhost:1234/");
        let url = config
            .endpoint_url("https://pokeapi.co/api/v2/evolution-chain/10/")
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/evolution-chain/10/");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::new("not a url");
        assert!(matches!(
            config.endpoint_url("pokemon/pikachu"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout_secs("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout_secs(" 30 ").unwrap(), Duration::from_secs(30));
        assert!(matches!(parse_timeout_secs("0"), Err(ApiError::Config(_))));
        assert!(matches!(parse_timeout_secs("soon"), Err(ApiError::Config(_))));
    }
}
