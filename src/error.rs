use thiserror::Error;

/// Error type for every tool invocation against the Jikan API.
#[derive(Debug, Error)]
pub enum MalError {
    /// Process configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller-supplied parameter is outside its enumeration or bound.
    #[error("Invalid parameter '{field}': {message}")]
    Validation { field: String, message: String },

    /// Upstream did not answer within the endpoint's time budget.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Upstream answered with a non-2xx status.
    #[error("Upstream returned HTTP {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Connection-level failure before a response was received.
    #[error("Network error while requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not JSON, or `data` had the wrong shape.
    #[error("Invalid API response format: {0}")]
    Format(String),
}

impl MalError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MalError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Status code carried by an upstream status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MalError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MalError {
    fn from(err: serde_json::Error) -> Self {
        MalError::Format(format!("Invalid JSON response from API: {}", err))
    }
}
