use std::sync::{Arc, Mutex, PoisonError};

use quiz_core::model::QuizResults;
use services::{QuizLoopService, ResultsService};

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn results(&self) -> Arc<ResultsService>;
}

/// Carries the results of a finished quiz from the quiz route to the results route.
///
/// Navigation happens after the slot is filled; the results view reads it and
/// redirects back to a fresh quiz when it is empty.
#[derive(Clone, Default)]
pub struct QuizHandoff {
    slot: Arc<Mutex<Option<QuizResults>>>,
}

impl QuizHandoff {
    pub fn put(&self, results: QuizResults) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(results);
    }

    #[must_use]
    pub fn peek(&self) -> Option<QuizResults> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    results: Arc<ResultsService>,
    handoff: QuizHandoff,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            results: app.results(),
            handoff: QuizHandoff::default(),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn handoff(&self) -> QuizHandoff {
        self.handoff.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    #[test]
    fn handoff_keeps_results_until_cleared() {
        let handoff = QuizHandoff::default();
        assert!(handoff.is_empty());

        handoff.put(QuizResults::new(Vec::new(), Vec::new(), fixed_now(), fixed_now()));
        let shared = handoff.clone();
        assert!(!shared.is_empty());
        assert_eq!(shared.peek().map(|results| results.total()), Some(0));
        assert!(!handoff.is_empty(), "peek must not consume");

        shared.clear();
        assert!(handoff.is_empty());
    }
}
