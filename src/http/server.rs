//! HTTP server
//!
//! Wires the task router to the listener, with permissive CORS (any
//! origin, mirroring the browser clients the API serves) and per-request
//! tracing.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes::task_routes;
use crate::config::HttpConfig;
use crate::store::TaskStore;

/// HTTP server for the task API
pub struct HttpServer {
    config: HttpConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store
    pub fn new<S: TaskStore + 'static>(config: HttpConfig, store: Arc<S>) -> Self {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let router = task_routes(store)
            .layer(cors)
            .layer(TraceLayer::new_for_http());

        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "task API listening");
        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTaskStore;

    #[test]
    fn test_server_creation() {
        let config = HttpConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
        };
        let server = HttpServer::new(config, Arc::new(MemoryTaskStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
        let _router = server.router();
    }
}
