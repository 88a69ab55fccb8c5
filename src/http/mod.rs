//! HTTP surface
//!
//! JSON-over-HTTP endpoints for task CRUD plus the landing page and the
//! connectivity probe. Handlers are stateless; errors from the store and
//! from validation converge at [`ApiError`].

pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::MessageResponse;
pub use routes::task_routes;
pub use server::HttpServer;
