//! HTTP server: a thin I/O wrapper around the pipeline
//!
//! The server owns request parsing, authentication, and CORS; the pipeline
//! never sees an unauthorized request.

pub mod auth;
pub mod routes;
pub mod state;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::RagConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Build the full application router for the given state.
pub fn build_router(state: AppState) -> Router {
    let server_config = state.config().server.clone();

    let api = routes::api_routes(server_config.max_upload_size).layer(
        middleware::from_fn_with_state(state.clone(), auth::require_bearer),
    );

    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if server_config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// RAG HTTP server
pub struct RagServer {
    state: AppState,
}

impl RagServer {
    /// Create a new server from configuration
    pub fn new(config: RagConfig) -> Result<Self> {
        Ok(Self {
            state: AppState::new(config)?,
        })
    }

    /// The address the server will bind to
    pub fn address(&self) -> String {
        let server = &self.state.config().server;
        format!("{}:{}", server.host, server.port)
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("invalid address: {}", e)))?;

        let router = build_router(self.state);

        tracing::info!("starting server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::Internal(format!("server error: {}", e)))?;

        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
