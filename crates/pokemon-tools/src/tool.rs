//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.present(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an identifier that may be given as a name or as a numeric id.
    ///
    /// Integers are rendered in decimal; anything else is an error.
    pub fn get_identifier(&self, key: &str) -> Result<String, ToolError> {
        match self.present(key) {
            None => Err(ToolError::MissingParameter(key.to_string())),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
            Some(_) => Err(ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string or integer".to_string(),
            }),
        }
    }

    /// Get a non-negative integer parameter, falling back to `default` when absent.
    pub fn get_u64_or(&self, key: &str, default: u64) -> Result<u64, ToolError> {
        match self.present(key) {
            None => Ok(default),
            Some(v) => v.as_u64().ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected non-negative integer".to_string(),
            }),
        }
    }

    /// A parameter counts as absent when it is missing or `null`.
    fn present(&self, key: &str) -> Option<&Value> {
        self.params.get(key).filter(|v| !v.is_null())
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The rendered text.
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }
}

/// Description of a tool as advertised to a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Trait for tools that can be invoked by a host runtime.
///
/// A tool takes scalar parameters and always renders text. Lookups that
/// fail upstream produce placeholder text, not an error; `ToolError` is
/// reserved for bad arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the accepted parameters.
    fn parameters(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;

    /// Definition advertised to hosts.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.parameters(),
        }
    }
}
