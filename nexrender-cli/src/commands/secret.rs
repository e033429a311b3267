//! Secret command handlers

use anyhow::Result;
use clap::Subcommand;

use crate::commands::{item, run_single};
use crate::config::Config;

/// Secret subcommands
#[derive(Subcommand)]
pub enum SecretCommands {
    /// List secrets
    List,
    /// Create or update a secret
    Create { name: String, value: String },
    /// Delete a secret
    Delete { id: String },
}

/// Handle secret commands
pub async fn handle_secret_command(command: SecretCommands, config: &Config) -> Result<()> {
    let item = match command {
        SecretCommands::List => item("secret", "list"),
        SecretCommands::Create { name, value } => item("secret", "create")
            .with_parameter("name", name)
            .with_parameter("value", value),
        SecretCommands::Delete { id } => item("secret", "delete").with_parameter("secretId", id),
    };

    run_single(config, item).await
}
