//! Task entity and wire payload
//!
//! A task is the sole persisted entity: a to-do item with scheduling and
//! classification metadata. Incoming bodies are validated for key
//! *presence* only; field values keep whatever JSON type the client sent
//! until the store binds them.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use thiserror::Error;

/// Keys that must be present in an add/update body
pub const REQUIRED_FIELDS: [&str; 5] = ["title", "dueDate", "priority", "category", "status"];

/// A persisted task row
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
    pub priority: String,
    pub category: String,
    pub status: String,
}

/// One or more required keys were absent from the request body
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Missing required fields")]
pub struct MissingFields;

/// An incoming task payload, presence-checked but not yet typed
///
/// Values stay as raw JSON: a non-string `priority` passes validation
/// here and fails later in the store, surfacing as a persistence error.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: Value,
    pub description: Value,
    pub due_date: Value,
    pub priority: Value,
    pub category: Value,
    pub status: Value,
}

impl TaskDraft {
    /// Build a draft from a parsed request body
    ///
    /// Every key in [`REQUIRED_FIELDS`] must exist. `description` is
    /// optional; absent or `null` normalizes to the empty string.
    pub fn from_body(body: &Value) -> Result<Self, MissingFields> {
        let obj = body.as_object().ok_or(MissingFields)?;

        if REQUIRED_FIELDS.iter().any(|key| !obj.contains_key(*key)) {
            return Err(MissingFields);
        }

        let description = match obj.get("description") {
            None | Some(Value::Null) => Value::String(String::new()),
            Some(value) => value.clone(),
        };

        Ok(Self {
            title: obj["title"].clone(),
            description,
            due_date: obj["dueDate"].clone(),
            priority: obj["priority"].clone(),
            category: obj["category"].clone(),
            status: obj["status"].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "title": "Buy milk",
            "description": "2%",
            "dueDate": "2024-05-01",
            "priority": "low",
            "category": "errand",
            "status": "pending"
        })
    }

    #[test]
    fn test_full_body_accepted() {
        let draft = TaskDraft::from_body(&full_body()).unwrap();
        assert_eq!(draft.title, json!("Buy milk"));
        assert_eq!(draft.description, json!("2%"));
        assert_eq!(draft.due_date, json!("2024-05-01"));
    }

    #[test]
    fn test_empty_body_rejected() {
        assert_eq!(TaskDraft::from_body(&json!({})), Err(MissingFields));
    }

    #[test]
    fn test_each_required_key_checked() {
        for key in REQUIRED_FIELDS {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(key);
            assert_eq!(TaskDraft::from_body(&body), Err(MissingFields), "{key}");
        }
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("description");
        let draft = TaskDraft::from_body(&body).unwrap();
        assert_eq!(draft.description, json!(""));

        let mut body = full_body();
        body["description"] = Value::Null;
        let draft = TaskDraft::from_body(&body).unwrap();
        assert_eq!(draft.description, json!(""));
    }

    #[test]
    fn test_presence_only_validation() {
        // An empty title and a numeric priority both pass: values are
        // not checked here.
        let mut body = full_body();
        body["title"] = json!("");
        body["priority"] = json!(5);
        assert!(TaskDraft::from_body(&body).is_ok());
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert_eq!(TaskDraft::from_body(&json!([1, 2])), Err(MissingFields));
        assert_eq!(TaskDraft::from_body(&json!(null)), Err(MissingFields));
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            priority: "low".to_string(),
            category: "errand".to_string(),
            status: "pending".to_string(),
        };

        let wire = serde_json::to_value(&task).unwrap();
        assert_eq!(wire["dueDate"], json!("2024-05-01"));
        assert_eq!(wire["id"], json!(1));
        assert!(wire.get("due_date").is_none());
    }
}
