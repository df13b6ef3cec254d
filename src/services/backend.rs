// src/services/backend.rs

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        execution::{RunCodeRequest, RunCodeResponse},
        problem::Problem,
    },
};

/// Read access to the problem store.
#[async_trait]
pub trait ProblemBackend: Send + Sync {
    async fn list_problems(&self) -> Result<Vec<Problem>, AppError>;

    /// Fails with `AppError::NotFound` when no problem has `id`.
    async fn get_problem(&self, id: &str) -> Result<Problem, AppError>;
}

/// The sandboxed code runner.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn run_code(&self, request: &RunCodeRequest) -> Result<RunCodeResponse, AppError>;
}
