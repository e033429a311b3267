//! Error types for the Nexrender client

use serde_json::Value;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Nexrender client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("HTTP {status}: {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Concise error message extracted from the response body
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if the API refused the request (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }
}

/// Extract a concise message from an error response body
///
/// Prefers a non-blank `error`, `message` or `detail` string field of a JSON
/// object. Other JSON is returned serialized, non-JSON text as-is, and an
/// empty body as "Request failed".
pub fn api_error_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "Request failed".to_string();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            let field = ["error", "message", "detail"]
                .iter()
                .filter_map(|key| value.get(key).and_then(Value::as_str))
                .find(|msg| !msg.trim().is_empty());

            match field {
                Some(msg) => msg.to_string(),
                None => value.to_string(),
            }
        }
        Err(_) => body.to_string(),
    }
}
