//! MySQL-backed task store
//!
//! Owns the connection pool. Writes ride MySQL autocommit: a statement
//! that errors takes effect not at all, so commit-or-rollback semantics
//! hold without explicit transactions.

use async_trait::async_trait;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};

use super::{bind_str, StoreError, StoreResult, TaskStore};
use crate::config::DatabaseConfig;
use crate::task::{Task, TaskDraft};

const SELECT_ALL: &str =
    "SELECT id, title, description, due_date, priority, category, status FROM tasks";

const INSERT: &str = "INSERT INTO tasks (title, description, due_date, priority, category, status) \
     VALUES (?, ?, ?, ?, ?, ?)";

const UPDATE: &str = "UPDATE tasks \
     SET title = ?, description = ?, due_date = ?, priority = ?, category = ?, status = ? \
     WHERE id = ?";

const DELETE: &str = "DELETE FROM tasks WHERE id = ?";

/// Task store backed by a MySQL connection pool
#[derive(Debug)]
pub struct MySqlTaskStore {
    pool: MySqlPool,
}

impl MySqlTaskStore {
    /// Build the pool from configuration
    ///
    /// Connections are established lazily, so a down database does not
    /// prevent startup; it surfaces per request (see `/test_db`).
    pub fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let ssl_mode: MySqlSslMode = config
            .ssl_mode
            .parse()
            .map_err(|_| StoreError::SslMode(config.ssl_mode.clone()))?;

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .ssl_mode(ssl_mode);

        let pool = MySqlPoolOptions::new().connect_lazy_with(options);
        Ok(Self { pool })
    }
}

#[async_trait]
impl TaskStore for MySqlTaskStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn insert(&self, draft: &TaskDraft) -> StoreResult<()> {
        sqlx::query(INSERT)
            .bind(bind_str("title", &draft.title)?)
            .bind(bind_str("description", &draft.description)?)
            .bind(bind_str("dueDate", &draft.due_date)?)
            .bind(bind_str("priority", &draft.priority)?)
            .bind(bind_str("category", &draft.category)?)
            .bind(bind_str("status", &draft.status)?)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, id: i64, draft: &TaskDraft) -> StoreResult<()> {
        // Zero rows affected is still success: unknown ids are silent.
        sqlx::query(UPDATE)
            .bind(bind_str("title", &draft.title)?)
            .bind(bind_str("description", &draft.description)?)
            .bind(bind_str("dueDate", &draft.due_date)?)
            .bind(bind_str("priority", &draft.priority)?)
            .bind(bind_str("category", &draft.category)?)
            .bind(bind_str("status", &draft.status)?)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
