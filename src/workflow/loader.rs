// src/workflow/loader.rs

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::{models::problem::Problem, services::backend::ProblemBackend};

/// What the problem detail page is showing.
#[derive(Debug, Clone, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded(Problem),
    NotFound,
}

impl DetailState {
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            DetailState::Loaded(problem) => Some(problem),
            _ => None,
        }
    }
}

/// Fetches problem lists and problem details.
///
/// Failures never reach the caller: they are logged and degrade to an empty
/// list or `DetailState::NotFound`. Detail loads are latest-request-wins:
/// each load takes a generation number and a response that is no longer the
/// newest request is dropped instead of overwriting the held state.
pub struct ProblemLoader<B: ?Sized> {
    backend: Arc<B>,
    generation: AtomicU64,
    detail: Mutex<DetailState>,
}

impl<B: ProblemBackend + ?Sized> ProblemLoader<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            generation: AtomicU64::new(0),
            detail: Mutex::new(DetailState::Loading),
        }
    }

    /// Fetches the full problem list. Every call re-fetches.
    pub async fn load_list(&self) -> Vec<Problem> {
        match self.backend.list_problems().await {
            Ok(problems) => {
                tracing::debug!("Loaded {} problems", problems.len());
                problems
            }
            Err(e) => {
                tracing::error!("Error fetching problems: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetches problem `id` and stores the outcome as the current detail state.
    ///
    /// Returns `None` when a newer `load_detail` call was issued while this one
    /// was in flight; the held state is left untouched in that case.
    pub async fn load_detail(&self, id: &str) -> Option<DetailState> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_detail() = DetailState::Loading;

        let outcome = match self.backend.get_problem(id).await {
            Ok(problem) => DetailState::Loaded(problem),
            Err(e) => {
                tracing::error!("Error fetching problem {}: {}", id, e);
                DetailState::NotFound
            }
        };

        let mut detail = self.lock_detail();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Discarding stale response for problem {}", id);
            return None;
        }
        *detail = outcome.clone();
        Some(outcome)
    }

    /// Snapshot of the current detail state.
    pub fn detail(&self) -> DetailState {
        self.lock_detail().clone()
    }

    fn lock_detail(&self) -> std::sync::MutexGuard<'_, DetailState> {
        self.detail.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
