//! Persistence adapter
//!
//! Translates handler intents into SQL statements. Every operation is a
//! single parameterized statement: it either fully takes effect or not
//! at all, with no retries.

pub mod error;
pub mod memory;
pub mod mysql;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryTaskStore;
pub use mysql::MySqlTaskStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::task::{Task, TaskDraft};

/// Storage operations backing the HTTP handlers
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Check connectivity (`SELECT 1`)
    async fn ping(&self) -> StoreResult<()>;

    /// Fetch every task, no filtering, no pagination
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Insert a new task; the id is assigned here, exactly once
    async fn insert(&self, draft: &TaskDraft) -> StoreResult<()>;

    /// Overwrite every mutable field of the task with the given id
    ///
    /// An unknown id is not an error: zero rows affected still succeeds.
    async fn update(&self, id: i64, draft: &TaskDraft) -> StoreResult<()>;

    /// Delete the task with the given id; unknown ids succeed silently
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Coerce a draft value to a string column binding
///
/// Drafts carry raw JSON, so this is where a non-string `priority` (or
/// any other field) finally fails, as a persistence error.
pub(crate) fn bind_str<'a>(field: &'static str, value: &'a Value) -> StoreResult<&'a str> {
    value
        .as_str()
        .ok_or(StoreError::IncompatibleValue { field })
}
