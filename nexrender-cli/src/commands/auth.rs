//! Credential command handlers

use anyhow::{Result, anyhow};
use clap::Subcommand;
use colored::*;
use nexrender_client::ClientError;
use tracing::debug;

use crate::config::Config;

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Check that the token is accepted by the API
    Check,
}

/// Handle auth commands
pub async fn handle_auth_command(command: AuthCommands, config: &Config) -> Result<()> {
    match command {
        AuthCommands::Check => {
            let client = config.client.client();
            debug!("Checking credentials against {}", client.base_url());

            client
                .verify_credentials()
                .await
                .map_err(|e| anyhow!(check_failure(&e, client.base_url())))?;
            eprintln!(
                "{} Credentials accepted by {}",
                "✓".green(),
                client.base_url().dimmed()
            );
            Ok(())
        }
    }
}

/// Describes a failed credential check
///
/// A 4xx answer means the token was refused; anything else means the
/// check itself could not be completed.
fn check_failure(err: &ClientError, base_url: &str) -> String {
    if err.is_client_error() {
        format!("Credentials rejected by {}: {}", base_url, err)
    } else {
        format!("Could not check credentials against {}: {}", base_url, err)
    }
}
