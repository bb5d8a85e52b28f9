use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{AnswerRecord, Question, QuestionId, QuizResults, Selection};

use super::progress::{QuizProgress, progress_percent};
use super::timer::{QuestionTimer, TimerTick, TimerToken};
use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// What triggered a finalize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceReason {
    /// The user pressed Next/Finish. Requires a highlighted option.
    Explicit,
    /// The countdown reached zero. Finalizes even with nothing highlighted.
    Timeout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Nothing changed: explicit advance without a selection, or the quiz is over.
    Ignored,
    /// Moved on to the question with this id.
    Next(QuestionId),
    /// The last question was finalized.
    Completed(QuizResults),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belonged to a countdown that has since been replaced.
    Stale,
    Running { time_left: u32 },
    /// Time ran out and the question was finalized.
    Advanced(AdvanceOutcome),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt over a fixed question set.
///
/// All mutation goes through `select`, `advance`, `retreat` and `tick`. Explicit
/// and timed-out advances share the same finalize path, so both produce the
/// same state for the same selection.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<String>,
    answers: Vec<AnswerRecord>,
    timer: QuestionTimer,
    started_at: DateTime<Utc>,
    results: Option<QuizResults>,
}

impl QuizSession {
    /// Start a session on `questions` with the first question's timer running.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if there are no questions.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            selected: None,
            answers: Vec::new(),
            timer: QuestionTimer::started(),
            started_at,
            results: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question on screen, or `None` once the quiz is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.timer.remaining()
    }

    /// Token to hand to the next scheduled `tick`.
    #[must_use]
    pub fn timer_token(&self) -> TimerToken {
        self.timer.token()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.results.is_some()
    }

    #[must_use]
    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Whether an explicit advance would do anything.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_complete() && self.selected.is_some()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        !self.is_complete() && self.current > 0
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.current + 1,
            total: self.total(),
            answered: self.answers.len(),
            percent: progress_percent(self.current, self.total()),
            time_left: self.time_left(),
            is_last: self.is_last_question(),
            is_complete: self.is_complete(),
        }
    }

    /// Highlight `option` for the current question. Last call wins.
    ///
    /// Returns `false` once the quiz is over.
    pub fn select(&mut self, option: impl Into<String>) -> bool {
        if self.is_complete() {
            return false;
        }
        self.selected = Some(option.into());
        true
    }

    /// Finalize the current question.
    ///
    /// `at` stamps completion when this was the last question.
    pub fn advance(&mut self, reason: AdvanceReason, at: DateTime<Utc>) -> AdvanceOutcome {
        if self.is_complete() {
            return AdvanceOutcome::Ignored;
        }
        if reason == AdvanceReason::Explicit && self.selected.is_none() {
            return AdvanceOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current) else {
            return AdvanceOutcome::Ignored;
        };

        let record = AnswerRecord::new(
            question.id(),
            Selection::from_option(self.selected.take()),
            question.correct(),
        );
        tracing::debug!(id = %record.id, ?reason, correct = record.is_correct(), "question finalized");
        self.answers.push(record);

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.timer.restart();
            return AdvanceOutcome::Next(self.questions[self.current].id());
        }

        self.timer.stop();
        let results = QuizResults::new(
            self.questions.clone(),
            self.answers.clone(),
            self.started_at,
            at,
        );
        self.results = Some(results.clone());
        AdvanceOutcome::Completed(results)
    }

    /// Step back to the previous question and reopen its answer.
    ///
    /// The previous answer is removed from the log and becomes the current
    /// selection again. Returns `false` when there is nothing to step back to.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }

        let previous = self.questions[self.current - 1].id();
        match self.answers.last() {
            Some(record) if record.id == previous => {}
            other => {
                tracing::warn!(
                    expected = %previous,
                    found = ?other.map(|record| record.id),
                    "answer log tail does not match previous question"
                );
                return false;
            }
        }

        let Some(record) = self.answers.pop() else {
            return false;
        };
        self.current -= 1;
        self.selected = record.selected.into_option();
        self.timer.restart();
        tracing::debug!(id = %previous, "stepped back");
        true
    }

    /// Advance the countdown by one second if `token` is still current.
    ///
    /// Reaching zero finalizes the question as a timeout.
    pub fn tick(&mut self, token: TimerToken, at: DateTime<Utc>) -> TickOutcome {
        if self.is_complete() {
            return TickOutcome::Stale;
        }
        match self.timer.tick(token) {
            TimerTick::Stale => TickOutcome::Stale,
            TimerTick::Running(time_left) => TickOutcome::Running { time_left },
            TimerTick::Expired => TickOutcome::Advanced(self.advance(AdvanceReason::Timeout, at)),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("answers_len", &self.answers.len())
            .field("time_left", &self.timer.remaining())
            .field("started_at", &self.started_at)
            .field("complete", &self.is_complete())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
