//! Commands module
//!
//! Defines all CLI commands and their handlers. Each handler turns its
//! arguments into input items and runs them through the batch runner.

mod auth;
mod batch;
mod font;
mod job;
mod secret;
mod template;
mod wait;

pub use auth::AuthCommands;
pub use font::FontCommands;
pub use job::JobCommands;
pub use secret::SecretCommands;
pub use template::TemplateCommands;
pub use wait::WaitArgs;

use anyhow::{Context, Result};
use clap::Subcommand;
use nexrender_core::domain::item::{InputItem, ItemResult};
use nexrender_runner::{BatchRunner, ItemHandler, NexrenderItemHandler};
use std::path::PathBuf;

use crate::config::Config;
use crate::output;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render job management
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Template management
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Font management
    Font {
        #[command(subcommand)]
        command: FontCommands,
    },
    /// Secret management
    Secret {
        #[command(subcommand)]
        command: SecretCommands,
    },
    /// Wait for one or more jobs to finish or error
    Wait(WaitArgs),
    /// Run a JSON file of input items
    Batch {
        /// Path to a JSON array of `{"parameters": {...}, "binary": {...}}` items
        file: PathBuf,
    },
    /// Credential checks
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Job { command } => job::handle_job_command(command, config).await,
        Commands::Template { command } => {
            template::handle_template_command(command, config).await
        }
        Commands::Font { command } => font::handle_font_command(command, config).await,
        Commands::Secret { command } => secret::handle_secret_command(command, config).await,
        Commands::Wait(args) => wait::handle_wait_command(args, config).await,
        Commands::Batch { file } => batch::handle_batch_command(&file, config).await,
        Commands::Auth { command } => auth::handle_auth_command(command, config).await,
    }
}

/// Item selecting `resource`/`operation`
pub(crate) fn item(resource: &str, operation: &str) -> InputItem {
    InputItem::new()
        .with_parameter("resource", resource)
        .with_parameter("operation", operation)
}

/// Runs `items` with the given handler under the configured failure policy
pub(crate) async fn run_items(
    config: &Config,
    items: &[InputItem],
    handler: &dyn ItemHandler,
) -> Result<Vec<ItemResult>> {
    BatchRunner::new(config.run)
        .run(items, handler)
        .await
        .context("Batch aborted")
}

/// Runs a single item with the general handler and prints its result
pub(crate) async fn run_single(config: &Config, item: InputItem) -> Result<()> {
    let handler = NexrenderItemHandler::new(config.client.client());
    let results = run_items(config, &[item], &handler).await?;
    output::print_single(results)
}

/// Reads a JSON body given inline or as `@path`
pub(crate) async fn read_body(body: &str) -> Result<String> {
    match body.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read body from {}", path)),
        None => Ok(body.to_string()),
    }
}
