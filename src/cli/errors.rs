//! CLI-specific error types
//!
//! Everything here is fatal: the process prints the error and exits
//! non-zero before the server ever binds.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Startup errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration is missing or malformed
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The store could not be constructed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The listener could not be bound
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
