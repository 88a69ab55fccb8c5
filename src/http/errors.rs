//! HTTP API errors
//!
//! Every handler failure funnels through [`ApiError`], which maps the
//! taxonomy to a status code and renders the `{"error": ...}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;
use crate::task::MissingFields;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler-boundary errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required key was absent from the request body (400)
    #[error("Missing required fields")]
    MissingFields,

    /// Any failure inside the persistence adapter (500)
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl From<MissingFields> for ApiError {
    fn from(_: MissingFields) -> Self {
        ApiError::MissingFields
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
///
/// The envelope carries only the error text; the status code lives in
/// the HTTP layer.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Store(StoreError::LockPoisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_is_fixed() {
        assert_eq!(ApiError::MissingFields.to_string(), "Missing required fields");
    }

    #[test]
    fn test_store_error_text_passes_through() {
        let err = ApiError::Store(StoreError::InvalidDate("nope".to_string()));
        assert!(err.to_string().contains("nope"));
    }
}
