use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{AnswerRecord, Question};

/// Number of answers whose selection equals the correct answer.
#[must_use]
pub fn score_answers(answers: &[AnswerRecord]) -> u32 {
    answers
        .iter()
        .filter(|answer| answer.is_correct())
        .fold(0_u32, |score, _| score.saturating_add(1))
}

/// Everything a finished session hands to the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    answers: Vec<AnswerRecord>,
    questions: Vec<Question>,
    score: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizResults {
    /// Build the handoff and compute the score from `answers`.
    #[must_use]
    pub fn new(
        questions: Vec<Question>,
        answers: Vec<AnswerRecord>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let score = score_answers(&answers);
        Self {
            answers,
            questions,
            score,
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Question answered by `answer`, looked up by id.
    #[must_use]
    pub fn question_for(&self, answer: &AnswerRecord) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == answer.id)
    }
}
