//! Font command handlers

use anyhow::Result;
use clap::Subcommand;
use nexrender_core::domain::item::BinaryRef;
use std::path::PathBuf;

use crate::commands::{item, run_single};
use crate::config::Config;

/// Font subcommands
#[derive(Subcommand)]
pub enum FontCommands {
    /// List fonts
    List,
    /// Get a font
    Get { id: String },
    /// Delete a font
    Delete { id: String },
    /// Upload a font file
    Upload {
        /// Path to the font file
        file: PathBuf,

        /// Font family name override
        #[arg(long)]
        family_name: Option<String>,

        /// Content type of the file (default: application/octet-stream)
        #[arg(long)]
        mime_type: Option<String>,
    },
}

/// Handle font commands
pub async fn handle_font_command(command: FontCommands, config: &Config) -> Result<()> {
    let item = match command {
        FontCommands::List => item("font", "list"),
        FontCommands::Get { id } => item("font", "get").with_parameter("fontId", id),
        FontCommands::Delete { id } => item("font", "delete").with_parameter("fontId", id),
        FontCommands::Upload {
            file,
            family_name,
            mime_type,
        } => {
            let mut binary = BinaryRef::new(file);
            if let Some(mime_type) = mime_type {
                binary = binary.with_mime_type(mime_type);
            }
            item("font", "upload")
                .with_parameter("familyName", family_name.unwrap_or_default())
                .with_binary("data", binary)
        }
    };

    run_single(config, item).await
}
