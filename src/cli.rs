//! Command-line interface for strictly_client.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strictly Client - terminal tic-tac-toe against a remote move service
#[derive(Parser, Debug)]
#[command(name = "strictly_client")]
#[command(about = "Play tic-tac-toe against a server-side opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal client
    Tui {
        /// Move service base URL. Overrides the config file and environment.
        #[arg(long)]
        server_url: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the reference opponent service
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}
