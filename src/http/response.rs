//! Response formatting
//!
//! Success envelopes for the task endpoints. The message strings are
//! part of the wire contract and must not drift.

use serde::Serialize;

/// Simple message envelope
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn db_ok() -> Self {
        Self::new("Database connection successful")
    }

    pub fn task_added() -> Self {
        Self::new("Task added successfully")
    }

    pub fn task_updated() -> Self {
        Self::new("Task updated successfully")
    }

    pub fn task_deleted() -> Self {
        Self::new("Task deleted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_messages() {
        assert_eq!(MessageResponse::db_ok().message, "Database connection successful");
        assert_eq!(MessageResponse::task_added().message, "Task added successfully");
        assert_eq!(MessageResponse::task_updated().message, "Task updated successfully");
        assert_eq!(MessageResponse::task_deleted().message, "Task deleted");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MessageResponse::task_deleted()).unwrap();
        assert_eq!(json, r#"{"message":"Task deleted"}"#);
    }
}
