//! Configuration module
//!
//! Credentials and run policy assembled from flags and environment.

use nexrender_runner::{ClientConfig, RunConfig};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials for the Nexrender API
    pub client: ClientConfig,

    /// Failure policy applied to every command
    pub run: RunConfig,
}
