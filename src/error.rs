//! Error types for the RAG pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the pipeline and its thin HTTP layer
///
/// Document-level failures (`Extraction`, `EmbeddingService` during index
/// build) abort a whole question batch. Question-level failures are caught by
/// the orchestrator and degraded to the sentinel answer for that question
/// only; they never truncate the batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The uploaded bytes could not be parsed as a PDF
    #[error("document extraction failed: {0}")]
    Extraction(String),

    /// Embedding service transport or service failure
    #[error("embedding service error: {0}")]
    EmbeddingService(String),

    /// A similarity search was issued against an index holding no vectors
    #[error("vector index is empty: document yielded no usable text")]
    EmptyIndex,

    /// Generative model transport or service failure
    #[error("generation service error: {0}")]
    Generation(String),

    /// Malformed client request (missing file, no questions)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Extraction(_) | Error::EmptyIndex => StatusCode::UNPROCESSABLE_ENTITY,
            Error::EmbeddingService(_) | Error::Generation(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
