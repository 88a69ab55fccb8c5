//! CLI module for taskpad
//!
//! Provides the command-line interface:
//! - serve: load configuration, connect the store, run the HTTP server

mod args;
mod errors;

pub use args::{Cli, Command};
pub use errors::{CliError, CliResult};

use std::sync::Arc;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::store::MySqlTaskStore;

/// Parse arguments and dispatch to the requested command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port } => serve(host, port).await,
    }
}

/// Boot the server: .env, tracing, config, store, listener
async fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    // Missing .env is fine; the environment may be set directly.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskpad=info,tower_http=info".into()),
        )
        .init();

    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    let store = MySqlTaskStore::connect(&config.database)?;
    tracing::info!(
        db_host = %config.database.host,
        db_name = %config.database.database,
        "store configured"
    );

    let server = HttpServer::new(config.http, Arc::new(store));
    server.start().await?;
    Ok(())
}
