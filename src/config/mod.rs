//! Environment-backed configuration
//!
//! All settings come from the process environment (optionally seeded from
//! a `.env` file by the CLI). Database credentials are mandatory: the
//! process refuses to start without a user and password.

use thiserror::Error;

/// Configuration errors. All of these are fatal at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} is missing/empty in the environment! Set it and restart.")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub http: HttpConfig,
}

/// MySQL connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database host (default: "localhost")
    pub host: String,
    /// Database port (default: 3306)
    pub port: u16,
    /// Database user (required, non-empty)
    pub user: String,
    /// Database password (required, non-empty)
    pub password: String,
    /// Database name (required, non-empty)
    pub database: String,
    /// Transport security mode (default: "required")
    pub ssl_mode: String,
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to bind to (default: 5000)
    pub port: u16,
}

impl HttpConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values count as unset, matching how `.env` files are
    /// commonly misconfigured.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let database = DatabaseConfig {
            host: get("MYSQL_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_port("MYSQL_PORT", get("MYSQL_PORT"), 3306)?,
            user: require("MYSQL_USER")?,
            password: require("MYSQL_PASSWORD")?,
            database: require("MYSQL_DB")?,
            ssl_mode: get("MYSQL_SSL").unwrap_or_else(|| "required".to_string()),
        };

        let http = HttpConfig {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_port("PORT", get("PORT"), 5000)?,
        };

        Ok(Self { database, http })
    }
}

fn parse_port(
    var: &'static str,
    value: Option<String>,
    default: u16,
) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
