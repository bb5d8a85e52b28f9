use quiz_core::model::QuizResults;
use services::{
    AdvanceOutcome, AdvanceReason, Clock, QuizLoopService, QuizSession, TickOutcome, TimerToken,
};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Next,
    Previous,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizStep {
    Continue,
    Completed(QuizResults),
}

impl From<AdvanceOutcome> for QuizStep {
    fn from(outcome: AdvanceOutcome) -> Self {
        match outcome {
            AdvanceOutcome::Completed(results) => Self::Completed(results),
            AdvanceOutcome::Ignored | AdvanceOutcome::Next(_) => Self::Continue,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub label: String,
    pub selected: bool,
}

/// Snapshot of everything the quiz screen renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub position_label: String,
    pub timer_label: String,
    pub percent: u32,
    pub question: String,
    pub options: Vec<QuizOptionVm>,
    pub can_previous: bool,
    pub can_next: bool,
    pub next_label: &'static str,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    /// Identity of the running countdown; changes whenever a tick should be rescheduled.
    #[must_use]
    pub fn timer_key(&self) -> Option<(TimerToken, u32)> {
        (!self.session.is_complete()).then(|| (self.session.timer_token(), self.session.time_left()))
    }

    #[must_use]
    pub fn screen(&self) -> Option<QuizScreenVm> {
        let question = self.session.current_question()?;
        let progress = self.session.progress();
        let selected = self.session.selected();
        let options = question
            .options()
            .iter()
            .map(|label| QuizOptionVm {
                label: label.clone(),
                selected: selected == Some(label.as_str()),
            })
            .collect();

        Some(QuizScreenVm {
            position_label: format!("Question {} of {}", progress.position, progress.total),
            timer_label: format_time_left(progress.time_left),
            percent: progress.percent,
            question: question.question().to_string(),
            options,
            can_previous: self.session.can_retreat(),
            can_next: self.session.can_advance(),
            next_label: if progress.is_last { "Finish" } else { "Next" },
        })
    }

    pub fn select(&mut self, option: String) {
        self.session.select(option);
    }

    pub fn previous(&mut self) -> bool {
        self.session.retreat()
    }

    /// Finalize the current question without awaiting storage.
    ///
    /// A `Completed` step still has to go through `QuizLoopService::finish`.
    pub fn next(&mut self, clock: Clock) -> QuizStep {
        self.session
            .advance(AdvanceReason::Explicit, clock.now())
            .into()
    }

    pub fn tick(&mut self, token: TimerToken, clock: Clock) -> QuizStep {
        match self.session.tick(token, clock.now()) {
            TickOutcome::Advanced(outcome) => outcome.into(),
            TickOutcome::Stale | TickOutcome::Running { .. } => QuizStep::Continue,
        }
    }
}

#[must_use]
pub fn format_time_left(seconds: u32) -> String {
    format!("{seconds:02}s")
}

/// # Errors
///
/// Returns `ViewError::NoQuestions` when the source is empty.
/// Returns `ViewError::LoadFailed` when the questions cannot be fetched.
pub async fn start_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    match quiz_loop.start_session().await {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(err) => {
            tracing::warn!(%err, "quiz failed to start");
            Err(ViewError::from(&err))
        }
    }
}
