use std::sync::Arc;

use chrono::TimeDelta;
use quiz_core::model::{QuestionId, QuizResults, Selection};

use crate::best_score::BestScoreService;

/// Label shown in place of an answer when the timer ran out with nothing selected.
pub const NO_ANSWER_LABEL: &str = "No answer";

/// One line of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// 1-based position in the list.
    pub position: usize,
    pub question_id: QuestionId,
    pub question: String,
    pub is_correct: bool,
    pub selected: Selection,
    /// Only present when the answer was wrong.
    pub correct_answer: Option<String>,
}

impl ResultRow {
    #[must_use]
    pub fn selected_label(&self) -> &str {
        self.selected.as_option().unwrap_or(NO_ANSWER_LABEL)
    }

    #[must_use]
    pub fn badge_label(&self) -> &'static str {
        if self.is_correct { "Correct" } else { "Incorrect" }
    }
}

/// Read-only summary of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsReport {
    pub score: u32,
    pub total: usize,
    pub best: u32,
    pub rows: Vec<ResultRow>,
    /// Wall time between session start and the last finalize.
    pub elapsed: TimeDelta,
}

impl ResultsReport {
    #[must_use]
    pub fn build(results: &QuizResults, best: u32) -> Self {
        let rows = results
            .answers()
            .iter()
            .enumerate()
            .filter_map(|(index, answer)| {
                let question = results.question_for(answer)?;
                let is_correct = answer.is_correct();
                Some(ResultRow {
                    position: index + 1,
                    question_id: answer.id,
                    question: question.question().to_string(),
                    is_correct,
                    selected: answer.selected.clone(),
                    correct_answer: (!is_correct).then(|| answer.correct.clone()),
                })
            })
            .collect();

        Self {
            score: results.score(),
            total: results.total(),
            best,
            rows,
            elapsed: results.completed_at() - results.started_at(),
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }

    #[must_use]
    pub fn best_label(&self) -> String {
        format!("{}/{}", self.best, self.total)
    }
}

/// Builds results reports; owns no state besides the best-score reader.
#[derive(Clone)]
pub struct ResultsService {
    best_scores: Arc<BestScoreService>,
}

impl ResultsService {
    #[must_use]
    pub fn new(best_scores: Arc<BestScoreService>) -> Self {
        Self { best_scores }
    }

    /// Report for the handed-off results.
    ///
    /// `None` means there is nothing to show and the caller should start a new
    /// quiz instead.
    pub async fn present(&self, handoff: Option<&QuizResults>) -> Option<ResultsReport> {
        let results = handoff?;
        let best = self.best_scores.best().await;
        Some(ResultsReport::build(results, best))
    }
}
