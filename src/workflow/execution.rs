// src/workflow/execution.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::{
    models::{
        execution::{ExecutionResult, ExecutionStatus, RunCodeRequest},
        problem::SupportedLanguage,
    },
    services::backend::ExecutionBackend,
};

/// Output shown when the run request itself fails.
pub const RUN_FAILED_MESSAGE: &str = "Error running code";

/// Which user action started an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionKind {
    Run,
    /// Currently graded exactly like `Run`.
    Submit,
}

/// Drives the run/submit cycle: `idle -> running -> success | error`.
///
/// The workflow does not reject overlapping calls; callers gate the trigger
/// on `is_run_enabled`. When calls overlap, the last one to finish owns the
/// displayed result.
pub struct ExecutionWorkflow<B: ?Sized> {
    backend: Arc<B>,
    state: Mutex<ExecutionResult>,
}

impl<B: ExecutionBackend + ?Sized> ExecutionWorkflow<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: Mutex::new(ExecutionResult::default()),
        }
    }

    /// Runs `code` against `stdin` and records the result.
    pub async fn run(&self, code: &str, language: SupportedLanguage, stdin: &str) -> ExecutionResult {
        self.execute(ExecutionKind::Run, code, language, stdin).await
    }

    /// Submits `code` for grading and records the result.
    pub async fn submit(
        &self,
        code: &str,
        language: SupportedLanguage,
        stdin: &str,
    ) -> ExecutionResult {
        self.execute(ExecutionKind::Submit, code, language, stdin).await
    }

    pub fn status(&self) -> ExecutionStatus {
        self.lock_state().status
    }

    /// Latest result (or the in-flight placeholder while running).
    pub fn result(&self) -> ExecutionResult {
        self.lock_state().clone()
    }

    /// Whether the Run control should accept clicks.
    pub fn is_run_enabled(&self) -> bool {
        self.status() != ExecutionStatus::Running
    }

    async fn execute(
        &self,
        kind: ExecutionKind,
        code: &str,
        language: SupportedLanguage,
        stdin: &str,
    ) -> ExecutionResult {
        *self.lock_state() = ExecutionResult {
            status: ExecutionStatus::Running,
            ..Default::default()
        };

        let request = RunCodeRequest {
            script: code.to_string(),
            language,
            stdin: stdin.to_string(),
        };

        tracing::info!("{:?} started ({}, {} bytes)", kind, language, code.len());
        let started = Instant::now();

        let result = match self.backend.run_code(&request).await {
            Ok(response) => {
                let status = if response.has_error_output() {
                    ExecutionStatus::Error
                } else {
                    ExecutionStatus::Success
                };
                ExecutionResult {
                    output: response.display_output(),
                    stdout: response.stdout.unwrap_or_default(),
                    stderr: response.stderr.unwrap_or_default(),
                    execution_time: Some(started.elapsed().as_millis() as u64),
                    memory_used: None,
                    status,
                }
            }
            Err(e) => {
                tracing::error!("{:?} failed: {}", kind, e);
                ExecutionResult {
                    output: RUN_FAILED_MESSAGE.to_string(),
                    status: ExecutionStatus::Error,
                    ..Default::default()
                }
            }
        };

        tracing::info!("{:?} finished with status {:?}", kind, result.status);
        *self.lock_state() = result.clone();
        result
    }

    fn lock_state(&self) -> MutexGuard<'_, ExecutionResult> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
