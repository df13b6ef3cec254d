// src/workflow/editor.rs

use std::collections::HashMap;

use crate::models::problem::{Problem, SupportedLanguage};

/// Rows the editor always shows, however short the code is.
pub const MIN_EDITOR_ROWS: usize = 15;

/// Source text and language of the code editor.
///
/// Switching language or problem overwrites the text with the matching
/// starter code; unsaved edits are dropped.
#[derive(Debug, Clone)]
pub struct EditorState {
    code: String,
    language: SupportedLanguage,
    line_count: usize,
    starter_code: HashMap<String, String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            code: String::new(),
            language: SupportedLanguage::default(),
            line_count: 1,
            starter_code: HashMap::new(),
        }
    }
}

impl EditorState {
    /// Editor seeded with `problem`'s starter code for `language`.
    pub fn new(problem: &Problem, language: SupportedLanguage) -> Self {
        let mut editor = Self {
            language,
            ..Default::default()
        };
        editor.load_problem(problem);
        editor
    }

    /// Takes over a new problem's starter code and resets the text.
    pub fn load_problem(&mut self, problem: &Problem) {
        self.starter_code = problem.starter_code.clone();
        self.reset_code();
    }

    pub fn set_language(&mut self, language: SupportedLanguage) {
        self.language = language;
        self.reset_code();
    }

    /// Restores the starter code of the current language.
    pub fn reset_code(&mut self) {
        let starter = self
            .starter_code
            .get(self.language.as_str())
            .cloned()
            .unwrap_or_default();
        self.set_code(starter);
    }

    /// Replaces the text, as a keystroke in the editor would.
    pub fn edit(&mut self, code: impl Into<String>) {
        self.set_code(code.into());
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> SupportedLanguage {
        self.language
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Gutter line numbers, `1..=line_count`.
    pub fn line_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.line_count
    }

    pub fn visible_rows(&self) -> usize {
        self.line_count.max(MIN_EDITOR_ROWS)
    }

    pub fn file_name(&self) -> &'static str {
        self.language.file_name()
    }

    fn set_code(&mut self, code: String) {
        self.line_count = code.split('\n').count();
        self.code = code;
    }
}
