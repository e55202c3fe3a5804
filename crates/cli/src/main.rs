//! trigctl CLI - Command-line interface for message queue triggers

mod commands;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use commands::Commands;
use std::sync::Arc;
use std::time::Duration;
use trigctl_core::application::TriggerService;
use trigctl_core::port::UuidProvider;
use trigctl_sdk::{
    ClientConfig, TriggerApiClient, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT, SERVER_URL_ENV,
    TIMEOUT_ENV,
};

#[derive(Parser, Debug)]
#[command(name = "trigctl")]
#[command(about = "Manage message queue triggers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Trigger API server URL
    #[arg(long, global = true, env = SERVER_URL_ENV, default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = TIMEOUT_ENV, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)?;

    let config = ClientConfig::new(&cli.server).with_timeout(Duration::from_secs(cli.timeout));
    tracing::debug!(server = %config.base_url, timeout = ?config.timeout, "Using trigger API");

    let client = TriggerApiClient::new(config).context("Invalid server configuration")?;
    let service = TriggerService::new(Arc::new(client), Arc::new(UuidProvider));

    let output = match cli.command {
        Commands::Mqtrigger(command) => commands::execute(&service, command).await?,
    };
    println!("{}", output);

    Ok(())
}
