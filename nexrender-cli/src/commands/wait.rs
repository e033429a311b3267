//! Wait command handler
//!
//! Polls each given job until it finishes or errors. Jobs are waited on
//! one after the other, never concurrently.

use anyhow::Result;
use clap::Args;
use nexrender_core::domain::item::InputItem;
use nexrender_core::domain::poll::{DEFAULT_POLL_INTERVAL_SECONDS, DEFAULT_TIMEOUT_MINUTES};
use nexrender_runner::WaitForJobHandler;

use crate::commands::run_items;
use crate::config::Config;
use crate::output;

/// Arguments of `nexrender wait`
#[derive(Args)]
pub struct WaitArgs {
    /// Job IDs to wait for
    #[arg(required = true)]
    pub job_ids: Vec<String>,

    /// Seconds between status checks
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECONDS as i64, allow_negative_numbers = true)]
    pub interval: i64,

    /// Minutes to wait for each job before failing
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MINUTES as i64, allow_negative_numbers = true)]
    pub timeout: i64,
}

/// Handle the wait command
pub async fn handle_wait_command(args: WaitArgs, config: &Config) -> Result<()> {
    let items: Vec<InputItem> = args
        .job_ids
        .iter()
        .map(|id| {
            InputItem::new()
                .with_parameter("jobId", id.as_str())
                .with_parameter("pollIntervalSeconds", args.interval)
                .with_parameter("timeoutMinutes", args.timeout)
        })
        .collect();

    let handler = WaitForJobHandler::new(config.client.client());
    let results = run_items(config, &items, &handler).await?;

    if items.len() == 1 {
        output::print_single(results)
    } else {
        output::print_all(results)
    }
}
