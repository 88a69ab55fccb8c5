//! In-memory task store
//!
//! Applies the same value-coercion rules as the MySQL store, which makes
//! it a faithful stand-in for handler and integration tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use super::{bind_str, StoreError, StoreResult, TaskStore};
use crate::task::{Task, TaskDraft};

/// Task store backed by a `Vec` behind a lock
#[derive(Default)]
pub struct MemoryTaskStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: i64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn materialize(id: i64, draft: &TaskDraft) -> StoreResult<Task> {
        Ok(Task {
            id,
            title: bind_str("title", &draft.title)?.to_string(),
            description: bind_str("description", &draft.description)?.to_string(),
            due_date: parse_date(&draft.due_date)?,
            priority: bind_str("priority", &draft.priority)?.to_string(),
            category: bind_str("category", &draft.category)?.to_string(),
            status: bind_str("status", &draft.status)?.to_string(),
        })
    }
}

fn parse_date(value: &Value) -> StoreResult<NaiveDate> {
    let raw = bind_str("dueDate", value)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| StoreError::InvalidDate(raw.to_string()))
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.tasks.clone())
    }

    async fn insert(&self, draft: &TaskDraft) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = inner.next_id + 1;
        let task = Self::materialize(id, draft)?;
        inner.next_id = id;
        inner.tasks.push(task);
        Ok(())
    }

    async fn update(&self, id: i64, draft: &TaskDraft) -> StoreResult<()> {
        let task = Self::materialize(id, draft)?;
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(slot) = inner.tasks.iter_mut().find(|t| t.id == id) {
            *slot = task;
        }
        // Unknown id: zero rows affected, still success.
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        inner.tasks.retain(|t| t.id != id);
        Ok(())
    }
}
