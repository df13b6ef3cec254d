// src/models/execution.rs

use serde::{Deserialize, Serialize};

use crate::models::problem::SupportedLanguage;

/// Body of `POST /api/run-code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunCodeRequest {
    pub script: String,
    pub language: SupportedLanguage,
    #[serde(default)]
    pub stdin: String,
}

/// Response of `POST /api/run-code`. Every channel is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunCodeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RunCodeResponse {
    /// True when the error channel carries content.
    pub fn has_error_output(&self) -> bool {
        self.stderr.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// The text to display: stdout, then stderr, then the backend message.
    /// Empty channels are skipped.
    pub fn display_output(&self) -> String {
        [&self.stdout, &self.stderr, &self.message]
            .into_iter()
            .filter_map(|channel| channel.as_deref())
            .find(|text| !text.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

/// Status of the execution panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    #[default]
    Idle,
    Running,
    Success,
    Error,
}

/// Outcome of the latest run. Replaced wholesale by the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    /// What the output panel shows.
    pub output: String,
    pub stdout: String,
    pub stderr: String,
    /// Round-trip time in milliseconds.
    pub execution_time: Option<u64>,
    /// Megabytes, when the backend reports it.
    pub memory_used: Option<u64>,
    pub status: ExecutionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_wins_over_stderr() {
        let response = RunCodeResponse {
            stdout: Some("42\n".to_string()),
            stderr: Some("warning: unused".to_string()),
            message: None,
        };
        assert_eq!(response.display_output(), "42\n");
        assert!(response.has_error_output());
    }

    #[test]
    fn test_empty_stdout_falls_through() {
        let response = RunCodeResponse {
            stdout: Some(String::new()),
            stderr: None,
            message: Some("Execution finished".to_string()),
        };
        assert_eq!(response.display_output(), "Execution finished");
        assert!(!response.has_error_output());
    }

    #[test]
    fn test_request_wire_format() {
        let request = RunCodeRequest {
            script: "print(1)".to_string(),
            language: SupportedLanguage::Python,
            stdin: String::new(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "script": "print(1)", "language": "python", "stdin": "" })
        );
    }
}
