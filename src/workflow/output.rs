// src/workflow/output.rs

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::models::execution::{ExecutionResult, ExecutionStatus};

/// Body text shown before anything has produced output.
pub const OUTPUT_PLACEHOLDER: &str = "Run your code to see the output here";

/// How long the pulse lingers after status leaves `running`.
pub const PULSE_LINGER: Duration = Duration::from_millis(500);

/// Rendered output panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputView {
    pub header: &'static str,
    pub is_error: bool,
    pub body: String,
    pub execution_time: Option<String>,
    pub memory_used: Option<String>,
}

impl OutputView {
    pub fn render(
        output: &str,
        status: ExecutionStatus,
        execution_time: Option<u64>,
        memory_used: Option<u64>,
    ) -> Self {
        let header = match status {
            ExecutionStatus::Idle => "Output",
            ExecutionStatus::Running => "Running...",
            ExecutionStatus::Success => "Success",
            ExecutionStatus::Error => "Error",
        };

        let body = if output.is_empty() {
            OUTPUT_PLACEHOLDER.to_string()
        } else {
            output.to_string()
        };

        Self {
            header,
            is_error: status == ExecutionStatus::Error,
            body,
            execution_time: execution_time.map(|ms| format!("Time: {} ms", ms)),
            memory_used: memory_used.map(|mb| format!("Memory: {} MB", mb)),
        }
    }

    pub fn from_result(result: &ExecutionResult) -> Self {
        Self::render(
            &result.output,
            result.status,
            result.execution_time,
            result.memory_used,
        )
    }

    pub fn has_metrics(&self) -> bool {
        self.execution_time.is_some() || self.memory_used.is_some()
    }
}

impl fmt::Display for OutputView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.header)?;
        if self.has_metrics() {
            let metrics: Vec<&str> = [&self.execution_time, &self.memory_used]
                .into_iter()
                .filter_map(|m| m.as_deref())
                .collect();
            write!(f, "  {}", metrics.join("  "))?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

#[derive(Debug, Default)]
struct PulseState {
    on: bool,
    epoch: u64,
    status: ExecutionStatus,
}

/// Cosmetic "pulse" flag of the output panel.
///
/// On as soon as status becomes `running`; off `PULSE_LINGER` after status
/// leaves `running`. A newer status change supersedes a pending switch-off;
/// re-feeding the current status is a no-op. Must be driven from inside a
/// tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct PulseIndicator {
    state: Arc<Mutex<PulseState>>,
}

impl PulseIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).on
    }

    /// Feeds the current execution status. Only changes have an effect.
    pub fn on_status(&self, status: ExecutionStatus) {
        let epoch = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.status == status {
                return;
            }
            state.status = status;
            state.epoch += 1;
            if status == ExecutionStatus::Running {
                state.on = true;
                return;
            }
            state.epoch
        };

        let shared = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(PULSE_LINGER).await;
            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if state.epoch == epoch {
                state.on = false;
            }
        });
    }
}
