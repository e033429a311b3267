//! Runner configuration
//!
//! Credentials for the Nexrender API and the run-level failure policy.

use nexrender_client::{DEFAULT_BASE_URL, NexrenderClient};

/// Credentials used to reach the Nexrender API
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.nexrender.com/api/v2")
    pub base_url: String,

    /// Bearer API token
    pub token: String,
}

impl ClientConfig {
    /// Creates a configuration for the hosted API
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Overrides the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.token.trim().is_empty() {
            anyhow::bail!("API token cannot be empty");
        }

        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        Ok(())
    }

    /// Builds a client for this configuration
    pub fn client(&self) -> NexrenderClient {
        NexrenderClient::new(self.base_url.clone(), self.token.clone())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Policy applied to a whole batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Record failed items and keep going instead of aborting the run
    pub continue_on_fail: bool,
}

impl RunConfig {
    pub fn continue_on_fail() -> Self {
        Self {
            continue_on_fail: true,
        }
    }

    pub fn abort_on_fail() -> Self {
        Self {
            continue_on_fail: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::new("token");
        assert_eq!(config.base_url, "https://api.nexrender.com/api/v2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::new("token");

        config.token = "  ".to_string();
        assert!(config.validate().is_err());

        config.token = "token".to_string();
        config = config.with_base_url("api.nexrender.com");
        assert!(config.validate().is_err());

        config = config.with_base_url("http://localhost:3000/api/v2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::new("very-secret");
        assert!(!format!("{:?}", config).contains("very-secret"));
    }

    #[test]
    fn test_run_config_default_aborts() {
        assert!(!RunConfig::default().continue_on_fail);
        assert!(RunConfig::continue_on_fail().continue_on_fail);
    }
}
