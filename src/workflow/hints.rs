// src/workflow/hints.rs

/// Per-hint reveal flags. Everything starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintTracker {
    revealed: Vec<bool>,
}

impl HintTracker {
    pub fn new(hint_count: usize) -> Self {
        Self {
            revealed: vec![false; hint_count],
        }
    }

    /// Flips hint `index` and returns its new state. Unknown indices are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Collapses everything and resizes for a new problem.
    pub fn reset(&mut self, hint_count: usize) {
        self.revealed = vec![false; hint_count];
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
