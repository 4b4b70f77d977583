//! MCP request handling and the stdio transport loop.
//!
//! Messages are newline-delimited JSON-RPC 2.0. Each line is handled on its
//! own task so several tool calls can be in flight; responses are written as
//! whole lines and correlated by id.

use std::collections::HashMap;
use std::sync::Arc;

use pokemon_tools::{ToolOutput, ToolRegistry};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::error::ServerError;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};

/// Name reported to hosts during `initialize`.
pub const SERVER_NAME: &str = "pokemon";

/// Protocol revisions this server can speak, newest last.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "2025-06-18"];

/// Parameters of `tools/call`.
#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<HashMap<String, Value>>,
}

/// MCP server backed by a tool registry.
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a server exposing the given tools.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Handle one raw line from the transport.
    ///
    /// Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    "Parse error",
                ));
            }
        };

        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Not a JSON-RPC request: {}", e);
                Some(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    "Invalid Request",
                ))
            }
        }
    }

    /// Dispatch a parsed request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!("Handling method '{}'", request.method);

        if request.is_notification() {
            debug!("Notification '{}' acknowledged", request.method);
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, Self::initialize(request.params.as_ref())),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                json!({ "tools": self.registry.definitions() }),
            ),
            "tools/call" => self.call_tool(id, request.params).await,
            other => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };

        Some(response)
    }

    fn initialize(params: Option<&Value>) -> Value {
        let requested = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str);

        if let Some(client) = params.and_then(|p| p.get("clientInfo")) {
            info!("Initialize from client {}", client);
        }

        let latest = SUPPORTED_PROTOCOL_VERSIONS[SUPPORTED_PROTOCOL_VERSIONS.len() - 1];
        let version = requested
            .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(v))
            .unwrap_or(latest);

        json!({
            "protocolVersion": version,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid tools/call params: {}", e),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing tools/call params",
                )
            }
        };

        if !self.registry.has_tool(&params.name) {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Unknown tool: {}", params.name),
            );
        }

        let arguments = params.arguments.unwrap_or_default();
        let output = match self.registry.execute(&params.name, arguments).await {
            Ok(output) => output,
            Err(e) => {
                debug!("Tool '{}' rejected arguments: {}", params.name, e);
                ToolOutput::failure(e.to_string())
            }
        };

        JsonRpcResponse::success(
            id,
            json!({
                "content": [{ "type": "text", "text": output.content }],
                "isError": !output.success
            }),
        )
    }

    /// Serve requests from `reader` until end of input.
    ///
    /// In-flight calls are finished before this returns.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let writer = Arc::new(Mutex::new(writer));
        let mut lines = reader.lines();
        let mut tasks = JoinSet::new();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let server = self.clone();
            let writer = writer.clone();
            tasks.spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    if let Err(e) = write_response(&writer, &response).await {
                        warn!("Failed to write response: {}", e);
                    }
                }
            });

            while let Some(finished) = tasks.try_join_next() {
                if let Err(e) = finished {
                    warn!("Request task failed: {}", e);
                }
            }
        }

        debug!("Input closed, waiting for {} in-flight requests", tasks.len());
        while let Some(finished) = tasks.join_next().await {
            if let Err(e) = finished {
                warn!("Request task failed: {}", e);
            }
        }

        Ok(())
    }

    /// Serve on the process's stdin and stdout.
    pub async fn run_stdio(&self) -> Result<(), ServerError> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        self.serve(stdin, tokio::io::stdout()).await?;
        info!("stdin closed, shutting down");
        Ok(())
    }
}

async fn write_response<W>(writer: &Mutex<W>, response: &JsonRpcResponse) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(response)?;
    line.push('\n');

    let mut writer = writer.lock().await;
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
