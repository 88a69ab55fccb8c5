//! Store errors
//!
//! Anything that goes wrong between a handler and the database. All of
//! these surface as HTTP 500 with the raw error text in the envelope.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence adapter errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver or server error while executing a statement
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// A draft value could not be bound to a string column
    #[error("incompatible value for field '{field}'")]
    IncompatibleValue { field: &'static str },

    /// A date string could not be parsed (in-memory store only; MySQL
    /// reports the equivalent failure as a Database error)
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Unrecognized MYSQL_SSL value
    #[error("unrecognized MYSQL_SSL mode '{0}'")]
    SslMode(String),

    /// Shared state lock poisoned (in-memory store only)
    #[error("store lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text_is_raw() {
        let err = StoreError::IncompatibleValue { field: "priority" };
        assert_eq!(err.to_string(), "incompatible value for field 'priority'");

        let err = StoreError::InvalidDate("05/01/2024".to_string());
        assert!(err.to_string().contains("05/01/2024"));
    }
}
