//! Batch command handler
//!
//! Runs a JSON file of input items, e.g.
//!
//! ```json
//! [
//!   { "parameters": { "resource": "job", "operation": "get", "jobId": "01ABC", "waitUntilDone": true } },
//!   { "parameters": { "resource": "font", "operation": "upload" },
//!     "binary": { "data": { "path": "./Inter.ttf" } } }
//! ]
//! ```

use anyhow::{Context, Result};
use nexrender_core::domain::item::InputItem;
use nexrender_runner::NexrenderItemHandler;
use std::path::Path;
use tracing::debug;

use crate::commands::run_items;
use crate::config::Config;
use crate::output;

/// Handle the batch command
pub async fn handle_batch_command(file: &Path, config: &Config) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read batch file {}", file.display()))?;
    let items = parse_items(&content)
        .with_context(|| format!("Invalid batch file {}", file.display()))?;
    debug!("Loaded {} item(s) from {}", items.len(), file.display());

    let handler = NexrenderItemHandler::new(config.client.client());
    let results = run_items(config, &items, &handler).await?;

    output::print_all(results)
}

fn parse_items(content: &str) -> Result<Vec<InputItem>> {
    Ok(serde_json::from_str(content)?)
}
