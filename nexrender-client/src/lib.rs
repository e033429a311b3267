//! Nexrender HTTP Client
//!
//! A small, type-safe HTTP client for the Nexrender Cloud API.
//!
//! Every request carries the bearer token as an `Authorization` header and
//! asks for JSON. Job and template payloads are free-form, so responses are
//! returned as `serde_json::Value` exactly as the API sent them.
//!
//! # Example
//!
//! ```no_run
//! use nexrender_client::NexrenderClient;
//!
//! #[tokio::main]
//! async fn main() -> nexrender_client::Result<()> {
//!     let client = NexrenderClient::new("https://api.nexrender.com/api/v2", "my-token");
//!
//!     let job = client.get_job("01HZX2K3").await?;
//!     println!("status: {:?}", job.status());
//!     Ok(())
//! }
//! ```

pub mod error;
mod fonts;
mod jobs;
mod secrets;
mod templates;

// Re-export commonly used types
pub use error::{ClientError, Result, api_error_message};
pub use nexrender_core::domain::job::{JobReference, JobStatusSnapshot};

use reqwest::{Client, Method, RequestBuilder, header};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Base URL of the hosted Nexrender Cloud API
pub const DEFAULT_BASE_URL: &str = "https://api.nexrender.com/api/v2";

/// HTTP client for the Nexrender Cloud API
///
/// Endpoints are grouped by resource:
/// - Jobs (create, list, get)
/// - Templates (create, list, get, update, delete, upload/download URLs)
/// - Fonts (upload, list, get, delete)
/// - Secrets (list, create, delete)
#[derive(Clone)]
pub struct NexrenderClient {
    /// Base URL of the API (e.g., "https://api.nexrender.com/api/v2")
    base_url: String,
    /// Bearer token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for NexrenderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NexrenderClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl NexrenderClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API; a trailing slash is dropped
    /// * `token` - The API token
    ///
    /// # Example
    /// ```
    /// use nexrender_client::NexrenderClient;
    ///
    /// let client = NexrenderClient::new("https://api.nexrender.com/api/v2/", "token");
    /// assert_eq!(client.base_url(), "https://api.nexrender.com/api/v2");
    /// ```
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the configured credentials are accepted
    ///
    /// Performs the same `GET /jobs` call used to list jobs and discards the body.
    pub async fn verify_credentials(&self) -> Result<()> {
        let response = self.request(Method::GET, "/jobs").send().await?;
        self.handle_optional_response(response).await.map(|_| ())
    }

    /// Start an authenticated request against `path`
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client
            .request(method, &url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/json")
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and return its JSON body
    ///
    /// A non-2xx status becomes [`ClientError::ApiError`] carrying the concise
    /// message extracted from the body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        self.handle_optional_response(response)
            .await?
            .ok_or_else(|| ClientError::ParseError("Empty response body".to_string()))
    }

    /// Handle an API response whose body may be empty (e.g., DELETE operations)
    async fn handle_optional_response(&self, response: reqwest::Response) -> Result<Option<Value>> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), api_error_message(&text)));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Percent-encodes an identifier for use as a single URL path segment
pub(crate) fn path_segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Body returned for operations the API answers with no content
pub(crate) fn success_body() -> Value {
    serde_json::json!({ "success": true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NexrenderClient::new("https://api.nexrender.com/api/v2", "t");
        assert_eq!(client.base_url(), "https://api.nexrender.com/api/v2");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = NexrenderClient::new("http://localhost:3000/api/v2/", "t");
        assert_eq!(client.base_url(), "http://localhost:3000/api/v2");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = NexrenderClient::with_client("http://localhost:3000", "t", http_client);
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = NexrenderClient::new("http://localhost:3000", "super-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
    }
}
