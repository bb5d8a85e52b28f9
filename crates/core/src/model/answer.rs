use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// What the user had highlighted when a question was finalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    Chosen(String),
    /// The timer ran out with nothing highlighted.
    NoSelection,
}

impl Selection {
    #[must_use]
    pub fn from_option(selected: Option<String>) -> Self {
        selected.map_or(Self::NoSelection, Self::Chosen)
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Selection::Chosen(value) => Some(value),
            Selection::NoSelection => None,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            Selection::Chosen(value) => Some(value),
            Selection::NoSelection => None,
        }
    }

    /// `NoSelection` never matches, whatever `correct` is.
    #[must_use]
    pub fn matches(&self, correct: &str) -> bool {
        matches!(self, Selection::Chosen(value) if value == correct)
    }
}

/// A finalized answer for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: QuestionId,
    pub selected: Selection,
    pub correct: String,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(id: QuestionId, selected: Selection, correct: impl Into<String>) -> Self {
        Self {
            id,
            selected,
            correct: correct.into(),
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected.matches(&self.correct)
    }
}
