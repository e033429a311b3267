//! Job command handlers

use anyhow::Result;
use clap::Subcommand;
use nexrender_core::domain::poll::{DEFAULT_POLL_INTERVAL_SECONDS, DEFAULT_TIMEOUT_MINUTES};
use nexrender_core::dto::job::QueryParameter;

use crate::commands::{item, read_body, run_single};
use crate::config::Config;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List jobs
    List {
        /// Query parameters as key=value (repeatable)
        #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_query)]
        query: Vec<QueryParameter>,
    },
    /// Get a job, optionally waiting until it finishes or errors
    Get {
        /// Job ID
        id: String,

        /// Poll until the job status is finished or error
        #[arg(short, long)]
        wait: bool,

        /// Seconds between status checks
        #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECONDS as i64, allow_negative_numbers = true)]
        interval: i64,

        /// Minutes to wait before failing
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_MINUTES as i64, allow_negative_numbers = true)]
        timeout: i64,
    },
    /// Create a job
    Create {
        /// Job payload as JSON, or @path to a JSON file
        #[arg(short, long)]
        body: String,
    },
}

fn parse_query(s: &str) -> Result<QueryParameter> {
    Ok(QueryParameter::parse(s))
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let item = match command {
        JobCommands::List { query } => {
            item("job", "list").with_parameter("query", serde_json::to_value(query)?)
        }
        JobCommands::Get {
            id,
            wait,
            interval,
            timeout,
        } => item("job", "get")
            .with_parameter("jobId", id)
            .with_parameter("waitUntilDone", wait)
            .with_parameter("pollIntervalSeconds", interval)
            .with_parameter("timeoutMinutes", timeout),
        JobCommands::Create { body } => {
            item("job", "create").with_parameter("body", read_body(&body).await?)
        }
    };

    run_single(config, item).await
}
