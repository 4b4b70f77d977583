//! MCP stdio server exposing PokéAPI lookups as tools.
//!
//! The binary wires [`ServerConfig`] into a [`pokeapi::PokeApiClient`], builds
//! the default tool registry and hands it to [`McpServer::run_stdio`].

pub mod config;
pub mod error;
pub mod jsonrpc;
pub mod server;

pub use config::{Args, ServerConfig};
pub use error::ServerError;
pub use jsonrpc::{error_codes, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use server::{McpServer, SERVER_NAME, SUPPORTED_PROTOCOL_VERSIONS};
