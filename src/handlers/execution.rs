// src/handlers/execution.rs

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};

use crate::{error::AppError, models::execution::RunCodeRequest, state::CannedRun};

/// Accepts a run request and answers with the configured canned response.
///
/// Nothing is executed; the body is only validated and logged.
pub async fn run_code(
    State(CannedRun(response)): State<CannedRun>,
    payload: Result<Json<RunCodeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    tracing::info!(
        "run-code: {} ({} bytes, {} bytes stdin)",
        request.language,
        request.script.len(),
        request.stdin.len()
    );

    Ok(Json(response.as_ref().clone()))
}
