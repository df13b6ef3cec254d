// src/handlers/problems.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, state::ProblemStore};

/// Lists every fixture problem.
pub async fn list_problems(State(ProblemStore(problems)): State<ProblemStore>) -> impl IntoResponse {
    Json(problems.as_ref().clone())
}

/// Retrieves a single fixture problem by its `_id`.
pub async fn get_problem(
    State(ProblemStore(problems)): State<ProblemStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let problem = problems
        .iter()
        .find(|p| p.object_id == id)
        .cloned()
        .ok_or(AppError::NotFound("Problem not found".to_string()))?;

    Ok(Json(problem))
}
