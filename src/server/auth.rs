//! Bearer-token authentication for API routes
//!
//! The HTTP layer owns authentication: unauthenticated requests are rejected
//! before the core pipeline is invoked, so the core can assume every request
//! it sees is already authorized.

use axum::extract::{Request, State};
use axum::http::{header::AUTHORIZATION, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::state::AppState;

/// Reject requests whose `Authorization: Bearer <token>` does not match the
/// configured secret. When no token is configured the API is open (the binary
/// warns about this at startup).
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.config().server.auth_token.as_deref() else {
        return next.run(request).await;
    };

    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token == expected)
        .unwrap_or(false);

    if authorized {
        next.run(request).await
    } else {
        tracing::warn!("rejected request with invalid or missing bearer token");
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "invalid or missing token" })),
        )
            .into_response()
    }
}
