use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based position of a question within a single quiz session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u32);

impl QuestionId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id for the question stored at a 0-based `index`.
    ///
    /// Saturates at `u32::MAX`; sessions never get close to that.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        let position = u32::try_from(index).unwrap_or(u32::MAX - 1);
        Self(position.saturating_add(1))
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_is_one_based() {
        assert_eq!(QuestionId::from_index(0), QuestionId::new(1));
        assert_eq!(QuestionId::from_index(9).value(), 10);
    }

    #[test]
    fn displays_as_bare_number() {
        assert_eq!(QuestionId::new(7).to_string(), "7");
        assert_eq!(format!("{:?}", QuestionId::new(7)), "QuestionId(7)");
    }
}
