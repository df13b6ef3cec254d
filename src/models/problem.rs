// src/models/problem.rs

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// A coding challenge as served by `/api/problems`.
///
/// The backend is loosely typed, so every field except `_id` falls back to a
/// default when missing. Tags and difficulty are decoded leniently: a
/// `category` that is not an array yields no tags, and an unknown difficulty
/// yields `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(rename = "_id")]
    pub object_id: String,

    /// Secondary slug-like id some records carry.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<Difficulty>,

    /// Category tags. Order is irrelevant.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub category: Vec<String>,

    #[serde(default, deserialize_with = "lenient_tags")]
    pub constraints: Vec<String>,

    #[serde(default)]
    pub examples: Vec<ProblemExample>,

    /// Starter code keyed by language name (`javascript`, `python`, ...).
    #[serde(default)]
    pub starter_code: HashMap<String, String>,

    #[serde(default)]
    pub solution_code: HashMap<String, String>,

    #[serde(default, deserialize_with = "lenient_tags")]
    pub hints: Vec<String>,

    /// Milliseconds.
    #[serde(default)]
    pub time_limit: u64,

    /// Megabytes.
    #[serde(default)]
    pub memory_limit: u64,

    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub submissions: u64,

    #[serde(default)]
    pub success_rate: f64,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl Problem {
    /// Starter code for `language`, or empty text when the problem has none.
    pub fn starter_code_for(&self, language: SupportedLanguage) -> &str {
        self.starter_code
            .get(language.as_str())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Time limit rounded to whole seconds.
    pub fn time_limit_seconds(&self) -> u64 {
        (self.time_limit as f64 / 1000.0).round() as u64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemExample {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// Capitalised label, e.g. "Medium".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            other => Err(AppError::BadRequest(format!("Unknown difficulty '{}'", other))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Languages the editor and the execution endpoint understand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    #[default]
    Javascript,
    Python,
    Java,
    Cpp,
    Rust,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 5] = [
        Self::Javascript,
        Self::Python,
        Self::Java,
        Self::Cpp,
        Self::Rust,
    ];

    /// Wire name sent to the backend and used as the starter-code key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Rust => "rust",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Javascript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::Rust => "Rust",
        }
    }

    /// Two-letter badge shown in the language selector.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Javascript => "JS",
            Self::Python => "PY",
            Self::Java => "JV",
            Self::Cpp => "C+",
            Self::Rust => "RS",
        }
    }

    /// File name shown in the editor title bar.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Javascript => "script.js",
            Self::Python => "main.py",
            Self::Java => "Main.java",
            Self::Cpp => "solution.cpp",
            Self::Rust => "main.rs",
        }
    }
}

impl FromStr for SupportedLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::BadRequest(format!("Unsupported language '{}'", s)))
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts any JSON value; only an array contributes entries, and only its
/// string items are kept.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}
