use std::sync::Arc;

use quiz_core::model::QuizResults;

use super::session::{AdvanceOutcome, AdvanceReason, QuizSession, TickOutcome};
use super::timer::TimerToken;
use crate::Clock;
use crate::best_score::BestScoreService;
use crate::error::SessionError;
use crate::loader::QuestionLoader;

/// Orchestrates loading, stepping through and completing a quiz.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    loader: Arc<QuestionLoader>,
    best_scores: Arc<BestScoreService>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, loader: Arc<QuestionLoader>, best_scores: Arc<BestScoreService>) -> Self {
        Self {
            clock,
            loader,
            best_scores,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Load questions and start a session on them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the questions cannot be fetched and
    /// `SessionError::Empty` if the source has none.
    pub async fn start_session(&self) -> Result<QuizSession, SessionError> {
        let questions = self.loader.load().await?;
        let session = QuizSession::new(questions, self.clock.now())?;
        tracing::info!(total = session.total(), "quiz session started");
        Ok(session)
    }

    /// Finalize the current question and record the best score on completion.
    pub async fn advance(&self, session: &mut QuizSession, reason: AdvanceReason) -> AdvanceOutcome {
        let outcome = session.advance(reason, self.clock.now());
        if let AdvanceOutcome::Completed(results) = &outcome {
            self.finish(results).await;
        }
        outcome
    }

    /// Forward one timer tick; a timeout on the last question completes the quiz.
    pub async fn tick(&self, session: &mut QuizSession, token: TimerToken) -> TickOutcome {
        let outcome = session.tick(token, self.clock.now());
        if let TickOutcome::Advanced(AdvanceOutcome::Completed(results)) = &outcome {
            self.finish(results).await;
        }
        outcome
    }

    /// Persist the outcome of a completed session.
    ///
    /// Returns whether the score became the new best.
    pub async fn finish(&self, results: &QuizResults) -> bool {
        tracing::info!(
            score = results.score(),
            total = results.total(),
            "quiz session completed"
        );
        self.best_scores.record(results.score()).await
    }
}
