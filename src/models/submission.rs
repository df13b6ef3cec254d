// src/models/submission.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::problem::SupportedLanguage;

/// One graded attempt at a problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub user_id: String,
    pub problem_id: String,
    pub code: String,
    pub language: SupportedLanguage,
    pub status: SubmissionStatus,

    /// Milliseconds.
    pub runtime: u64,

    /// Megabytes.
    pub memory: u64,

    pub submitted_at: DateTime<Utc>,
}

/// Grading verdict. Exactly one per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    RuntimeError,
    CompilationError,
}

impl SubmissionStatus {
    /// Badge text on the submissions page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::TimeLimitExceeded => "Time Limit",
            Self::MemoryLimitExceeded => "Memory Limit",
            Self::RuntimeError => "Runtime Error",
            Self::CompilationError => "Compilation Error",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}
