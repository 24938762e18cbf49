use crate::MalError;
use rmcp::model::{Content, IntoContents};
use serde::Serialize;

/// Structured error response for MCP tool calls.
/// Provides error_code + suggestion so LLMs can decide whether to retry.
#[derive(Debug, Serialize)]
pub struct ToolError {
    pub error_code: String,
    pub message: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl IntoContents for ToolError {
    fn into_contents(self) -> Vec<Content> {
        let json = serde_json::to_string(&self).unwrap_or_else(|_| self.message.clone());
        vec![Content::text(json)]
    }
}

impl ToolError {
    fn new(error_code: &str, message: String, suggestion: &str) -> Self {
        ToolError {
            error_code: error_code.into(),
            message,
            suggestion: suggestion.into(),
            field: None,
            status: None,
        }
    }
}

impl From<MalError> for ToolError {
    fn from(err: MalError) -> Self {
        let message = err.to_string();
        match err {
            MalError::Validation { field, .. } => ToolError {
                field: Some(field),
                ..ToolError::new(
                    "INVALID_PARAMS",
                    message,
                    "Check the parameter against the tool schema: allowed values and numeric bounds.",
                )
            },
            MalError::Timeout { .. } => ToolError::new(
                "UPSTREAM_TIMEOUT",
                message,
                "The Jikan API is slow right now. Retry later or narrow the request with a smaller limit.",
            ),
            MalError::Status { status, .. } => {
                let suggestion = match status {
                    404 => "No entry with that ID. Use search_anime or search_manga to find the right MAL ID.",
                    429 => "Jikan rate limit reached. Wait a few seconds before calling again.",
                    500..=599 => "The Jikan API (or MyAnimeList behind it) is failing. Retry later.",
                    _ => "The Jikan API rejected the request. Check the parameters.",
                };
                ToolError {
                    status: Some(status),
                    ..ToolError::new("UPSTREAM_STATUS", message, suggestion)
                }
            }
            MalError::Network { .. } => ToolError::new(
                "NETWORK_ERROR",
                message,
                "Could not reach the Jikan API. Check connectivity and the BASE_URL setting.",
            ),
            MalError::Format(_) => ToolError::new(
                "INVALID_RESPONSE",
                message,
                "The Jikan API returned an unexpected payload. Retry, or try a different tool.",
            ),
            MalError::Config(_) => ToolError::new(
                "CONFIG_ERROR",
                message,
                "The server is misconfigured. Set BASE_URL to the Jikan API root (e.g. https://api.jikan.moe/v4).",
            ),
        }
    }
}
