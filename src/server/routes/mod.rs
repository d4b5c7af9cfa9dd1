//! API routes for the RAG server

pub mod run;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new().route(
        "/v1/run",
        post(run::run_pipeline).layer(DefaultBodyLimit::max(max_upload_size)),
    )
}
