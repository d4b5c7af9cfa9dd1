//! Document Q&A endpoint

use axum::extract::{Multipart, State};
use axum::Json;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::RunResponse;

/// POST /api/v1/run - answer a list of questions against one uploaded document
///
/// Multipart form: one `file` part (the PDF) and one or more `questions`
/// parts. A `questions` part may be a single question or a JSON array of
/// questions.
pub async fn run_pipeline(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RunResponse>> {
    let start = Instant::now();

    let mut document: Option<Vec<u8>> = None;
    let mut questions: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidRequest(format!("failed to read multipart field: {}", e)))?
    {
        match field.name().unwrap_or("") {
            "file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::InvalidRequest(format!("failed to read file: {}", e)))?;
                document = Some(data.to_vec());
            }
            "questions" => {
                let text = field.text().await.map_err(|e| {
                    Error::InvalidRequest(format!("failed to read questions: {}", e))
                })?;
                match serde_json::from_str::<Vec<String>>(&text) {
                    Ok(list) => questions.extend(list),
                    Err(_) => questions.push(text),
                }
            }
            other => {
                tracing::debug!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    let document =
        document.ok_or_else(|| Error::InvalidRequest("missing 'file' field".to_string()))?;

    questions.retain(|q| !q.trim().is_empty());
    if questions.is_empty() {
        return Err(Error::InvalidRequest(
            "at least one question is required".to_string(),
        ));
    }

    let answers = state.pipeline().run(&document, &questions).await?;

    tracing::info!(
        questions = answers.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    Ok(Json(RunResponse { answers }))
}
