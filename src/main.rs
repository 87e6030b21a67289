//! Strictly Client - Unified CLI
//!
//! Runs the terminal client or the reference opponent service.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_client::ClientConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { server_url, config } => run_tui(server_url, config).await,
        Command::Serve { host, port } => run_server(host, port).await,
    }
}

/// Run the terminal client
async fn run_tui(server_url: Option<String>, config: Option<std::path::PathBuf>) -> Result<()> {
    let mut config = ClientConfig::load(config.as_deref())?;
    if let Some(url) = server_url {
        config = config.with_server_url(url);
    }
    strictly_client::run_tui(config).await
}

/// Run the reference opponent service
#[instrument]
async fn run_server(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(host = %host, port, "Starting reference opponent service");
    strictly_client::serve(host, port).await
}
