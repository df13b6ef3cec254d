// src/workflow/catalog.rs

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::{
    error::AppError,
    models::problem::{Difficulty, Problem, ProblemExample},
    utils::format::truncate_chars,
    workflow::hints::HintTracker,
};

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_TAGS: &str = "No tags";
pub const NO_EXAMPLES: &str = "No examples available.";
pub const NO_CONSTRAINTS: &str = "No constraints available.";
pub const NO_HINTS: &str = "No hints available.";
pub const NO_MATCHES: &str = "No problems found matching your criteria.";

/// Characters of the description shown on a card.
const SUMMARY_CHARS: usize = 100;

/// Tabs of the problem list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProblemTab {
    #[default]
    All,
    Difficulty(Difficulty),
    Solved,
    Unsolved,
}

impl FromStr for ProblemTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "solved" => Ok(Self::Solved),
            "unsolved" => Ok(Self::Unsolved),
            other => other
                .parse::<Difficulty>()
                .map(Self::Difficulty)
                .map_err(|_| AppError::BadRequest(format!("Unknown problem tab '{}'", s))),
        }
    }
}

/// Search text plus selected tab.
#[derive(Debug, Clone, Default)]
pub struct ProblemQuery {
    pub search: String,
    pub tab: ProblemTab,
}

impl ProblemQuery {
    pub fn new(search: impl Into<String>, tab: ProblemTab) -> Self {
        Self {
            search: search.into(),
            tab,
        }
    }
}

/// Case-insensitive substring match against title, description or any tag.
pub fn matches_search(problem: &Problem, search: &str) -> bool {
    let needle = search.to_lowercase();
    problem.title.to_lowercase().contains(&needle)
        || problem
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
        || problem
            .category
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

pub fn matches_tab(problem: &Problem, tab: ProblemTab, solved: &HashSet<String>) -> bool {
    match tab {
        ProblemTab::All => true,
        ProblemTab::Difficulty(difficulty) => problem.difficulty == Some(difficulty),
        ProblemTab::Solved => solved.contains(&problem.object_id),
        ProblemTab::Unsolved => !solved.contains(&problem.object_id),
    }
}

/// Problems passing both the search and the tab, in input order.
pub fn filter_problems<'a>(
    problems: &'a [Problem],
    query: &ProblemQuery,
    solved: &HashSet<String>,
) -> Vec<&'a Problem> {
    problems
        .iter()
        .filter(|p| matches_search(p, &query.search) && matches_tab(p, query.tab, solved))
        .collect()
}

/// Summary card of the problem list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub solved: bool,
}

impl ProblemCard {
    pub fn new(problem: &Problem, solved: &HashSet<String>) -> Self {
        let description = problem.description.as_deref().unwrap_or(NO_DESCRIPTION);
        Self {
            id: problem.object_id.clone(),
            title: problem.title.clone(),
            summary: format!("{}...", truncate_chars(description, SUMMARY_CHARS)),
            difficulty: problem
                .difficulty
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            tags: problem.category.clone(),
            solved: solved.contains(&problem.object_id),
        }
    }
}

impl fmt::Display for ProblemCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.solved { "✓" } else { " " };
        writeln!(f, "{} [{}] {}", mark, self.id, self.title)?;
        writeln!(f, "    {}", self.summary)?;
        write!(f, "    {}", self.difficulty)?;
        if !self.tags.is_empty() {
            write!(f, " | {}", self.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Cards for the filtered list. Records with an empty `_id` are skipped.
pub fn problem_cards(
    problems: &[Problem],
    query: &ProblemQuery,
    solved: &HashSet<String>,
) -> Vec<ProblemCard> {
    filter_problems(problems, query, solved)
        .into_iter()
        .filter(|p| {
            if p.object_id.is_empty() {
                tracing::error!("Problem ID is undefined for: {}", p.title);
                return false;
            }
            true
        })
        .map(|p| ProblemCard::new(p, solved))
        .collect()
}

/// Everything the detail page shows about a problem.
#[derive(Debug, Clone)]
pub struct ProblemDetailView {
    pub title: String,
    pub difficulty_label: String,
    pub time_limit_seconds: u64,
    pub likes: u64,
    pub description: String,
    pub tags: Vec<String>,
    pub examples: Vec<ProblemExample>,
    pub constraints: Vec<String>,
    pub hints: Vec<String>,
}

impl ProblemDetailView {
    pub fn new(problem: &Problem) -> Self {
        Self {
            title: problem.title.clone(),
            difficulty_label: problem
                .difficulty
                .map(|d| d.label().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            time_limit_seconds: problem.time_limit_seconds(),
            likes: problem.likes,
            description: problem.description.clone().unwrap_or_default(),
            tags: problem.category.clone(),
            examples: problem.examples.clone(),
            constraints: problem.constraints.clone(),
            hints: problem.hints.clone(),
        }
    }

    /// Lines of the description tab, ending with the tags (or the fallback).
    pub fn description_section(&self) -> Vec<String> {
        let tags = if self.tags.is_empty() {
            NO_TAGS.to_string()
        } else {
            self.tags.join(", ")
        };
        vec![self.description.clone(), tags]
    }

    pub fn examples_section(&self) -> Vec<String> {
        if self.examples.is_empty() {
            return vec![NO_EXAMPLES.to_string()];
        }
        let mut lines = Vec::new();
        for (index, example) in self.examples.iter().enumerate() {
            lines.push(format!("Example {}:", index + 1));
            lines.push(format!("  Input: {}", example.input));
            lines.push(format!("  Output: {}", example.output));
            if let Some(explanation) = example.explanation.as_deref().filter(|e| !e.is_empty()) {
                lines.push(format!("  Explanation: {}", explanation));
            }
        }
        lines
    }

    pub fn constraints_section(&self) -> Vec<String> {
        if self.constraints.is_empty() {
            return vec![NO_CONSTRAINTS.to_string()];
        }
        self.constraints.iter().map(|c| format!("• {}", c)).collect()
    }

    /// Hint headers, with the text of revealed hints underneath.
    pub fn hints_section(&self, tracker: &HintTracker) -> Vec<String> {
        if self.hints.is_empty() {
            return vec![NO_HINTS.to_string()];
        }
        let mut lines = Vec::new();
        for (index, hint) in self.hints.iter().enumerate() {
            lines.push(format!("Hint {}", index + 1));
            if tracker.is_revealed(index) {
                lines.push(format!("  {}", hint));
            }
        }
        lines
    }
}
