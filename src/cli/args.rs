//! CLI argument definitions using clap
//!
//! Commands:
//! - taskpad serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// taskpad - a minimal task-management HTTP backend
#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides HOST, default 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT, default 5000)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
