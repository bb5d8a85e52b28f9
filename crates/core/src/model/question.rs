use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: correct answer is also listed as incorrect")]
    DuplicateCorrect { id: QuestionId },
}

/// Question as it appears in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub correct: String,
    pub incorrect: Vec<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        correct: impl Into<String>,
        incorrect: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            question: question.into(),
            correct: correct.into(),
            incorrect: incorrect.into_iter().map(Into::into).collect(),
        }
    }
}

/// A question ready to be asked: the prompt plus its options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question: String,
    correct: String,
    options: Vec<String>,
}

impl Question {
    /// Build a question from a source record.
    ///
    /// The options start as `[correct, incorrect...]` and are then handed to
    /// `permute`, which decides the display order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::DuplicateCorrect` if the correct answer also
    /// appears among the incorrect ones, since `options` must contain it once.
    pub fn from_record(
        id: QuestionId,
        record: QuestionRecord,
        permute: impl FnOnce(&mut [String]),
    ) -> Result<Self, QuestionError> {
        let QuestionRecord {
            question,
            correct,
            incorrect,
        } = record;

        if incorrect.iter().any(|option| *option == correct) {
            return Err(QuestionError::DuplicateCorrect { id });
        }

        let mut options = Vec::with_capacity(incorrect.len() + 1);
        options.push(correct.clone());
        options.extend(incorrect);
        permute(&mut options);

        Ok(Self {
            id,
            question,
            correct,
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}
