//! Task HTTP routes
//!
//! Each handler is a direct mapping from one request to one store call.
//! Handlers hold no state of their own; the store is injected via axum
//! `State` and the router is generic over the store implementation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use super::errors::ApiResult;
use super::response::MessageResponse;
use crate::store::TaskStore;
use crate::task::{Task, TaskDraft};

/// Build the task router over any store implementation
pub fn task_routes<S: TaskStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/test_db", get(test_db_handler::<S>))
        .route("/tasks", get(list_tasks_handler::<S>))
        .route("/addTask", post(add_task_handler::<S>))
        .route("/updateTask/{id}", put(update_task_handler::<S>))
        .route("/deleteTask/{id}", delete(delete_task_handler::<S>))
        .with_state(store)
}

/// Static landing page
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Connectivity probe
async fn test_db_handler<S: TaskStore>(
    State(store): State<Arc<S>>,
) -> ApiResult<Json<MessageResponse>> {
    store.ping().await?;
    tracing::info!("database connection check succeeded");
    Ok(Json(MessageResponse::db_ok()))
}

/// All tasks, every column, no pagination
async fn list_tasks_handler<S: TaskStore>(
    State(store): State<Arc<S>>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = store.list().await?;
    Ok(Json(tasks))
}

async fn add_task_handler<S: TaskStore>(
    State(store): State<Arc<S>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let draft = TaskDraft::from_body(&body)?;
    store.insert(&draft).await?;
    Ok(Json(MessageResponse::task_added()))
}

async fn update_task_handler<S: TaskStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let draft = TaskDraft::from_body(&body)?;
    store.update(id, &draft).await?;
    Ok(Json(MessageResponse::task_updated()))
}

async fn delete_task_handler<S: TaskStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    store.delete(id).await?;
    Ok(Json(MessageResponse::task_deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTaskStore;

    #[test]
    fn test_router_builds() {
        let store = Arc::new(MemoryTaskStore::new());
        let _router = task_routes(store);
    }
}
