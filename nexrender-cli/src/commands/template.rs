//! Template command handlers

use anyhow::Result;
use clap::Subcommand;

use crate::commands::{item, read_body, run_single};
use crate::config::Config;

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List templates
    List,
    /// Get a template
    Get { id: String },
    /// Create a template
    Create {
        /// Template payload as JSON, or @path to a JSON file
        #[arg(short, long, default_value = r#"{"type":"aep","displayName":"My Template"}"#)]
        body: String,
    },
    /// Update a template
    Update {
        id: String,

        /// Fields to change as JSON, or @path to a JSON file
        #[arg(short, long)]
        body: String,
    },
    /// Delete a template
    Delete { id: String },
    /// Get a presigned download URL for the template file
    DownloadUrl { id: String },
    /// Get a fresh upload URL for the template file
    UploadUrl { id: String },
}

/// Handle template commands
pub async fn handle_template_command(command: TemplateCommands, config: &Config) -> Result<()> {
    let item = match command {
        TemplateCommands::List => item("template", "list"),
        TemplateCommands::Get { id } => item("template", "get").with_parameter("templateId", id),
        TemplateCommands::Create { body } => {
            item("template", "create").with_parameter("body", read_body(&body).await?)
        }
        TemplateCommands::Update { id, body } => item("template", "update")
            .with_parameter("templateId", id)
            .with_parameter("body", read_body(&body).await?),
        TemplateCommands::Delete { id } => {
            item("template", "delete").with_parameter("templateId", id)
        }
        TemplateCommands::DownloadUrl { id } => {
            item("template", "getDownloadUrl").with_parameter("templateId", id)
        }
        TemplateCommands::UploadUrl { id } => {
            item("template", "getUploadUrl").with_parameter("templateId", id)
        }
    };

    run_single(config, item).await
}
