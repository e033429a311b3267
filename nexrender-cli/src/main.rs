//! Nexrender CLI
//!
//! Command-line interface for the Nexrender Cloud API. Every command is
//! run as a batch of input items, so single calls and batch files share
//! the same failure policy and output format.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use nexrender_client::DEFAULT_BASE_URL;
use nexrender_runner::{ClientConfig, RunConfig};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nexrender")]
#[command(about = "Nexrender Cloud API CLI", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "NEXRENDER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Bearer API token
    #[arg(long, env = "NEXRENDER_API_TOKEN", hide_env_values = true)]
    token: String,

    /// Record failed items as `{"error": ...}` and keep going
    #[arg(long)]
    continue_on_fail: bool,

    /// Log requests and poll iterations to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let default_filter = if cli.verbose {
        "nexrender=debug"
    } else {
        "nexrender=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = ClientConfig::new(cli.token).with_base_url(cli.base_url);
    client.validate()?;
    debug!("Using {:?}", client);

    let config = Config {
        client,
        run: RunConfig {
            continue_on_fail: cli.continue_on_fail,
        },
    };

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_wait_command() {
        let cli = Cli::try_parse_from([
            "nexrender",
            "--token",
            "t",
            "--continue-on-fail",
            "wait",
            "01A",
            "01B",
            "--interval",
            "2",
        ])
        .unwrap();

        assert!(cli.continue_on_fail);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        match cli.command {
            Commands::Wait(args) => {
                assert_eq!(args.job_ids, vec!["01A", "01B"]);
                assert_eq!(args.interval, 2);
                assert_eq!(args.timeout, 30);
            }
            _ => panic!("expected wait command"),
        }
    }
}
