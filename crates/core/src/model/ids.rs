use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QuizError;

/// Number of questions in a play-through.
pub const QUESTION_COUNT: usize = 9;

/// Number of answer options per question.
pub const OPTION_COUNT: usize = 4;

/// Zero-based position of a question in the fixed question table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionIndex(u8);

impl QuestionIndex {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(QUESTION_COUNT as u8 - 1);

    /// Creates a new `QuestionIndex`
    ///
    /// # Errors
    ///
    /// Returns `QuizError::QuestionOutOfRange` if `value` is not in 0-8.
    pub fn new(value: u8) -> Result<Self, QuizError> {
        if usize::from(value) < QUESTION_COUNT {
            Ok(Self(value))
        } else {
            Err(QuizError::QuestionOutOfRange(value))
        }
    }

    /// Returns the underlying u8 value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_usize(&self) -> usize {
        usize::from(self.0)
    }

    /// One-based question number, as shown to players.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.0 + 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// The following question, or `None` past the last one.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }
}

/// Position of an answer option within a question (A-D).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionIndex(u8);

impl OptionIndex {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);

    pub const ALL: [Self; OPTION_COUNT] = [Self::A, Self::B, Self::C, Self::D];

    /// Creates a new `OptionIndex`
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OptionOutOfRange` if `value` is not in 0-3.
    pub fn new(value: u8) -> Result<Self, QuizError> {
        if usize::from(value) < OPTION_COUNT {
            Ok(Self(value))
        } else {
            Err(QuizError::OptionOutOfRange(value))
        }
    }

    /// Returns the underlying u8 value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_usize(&self) -> usize {
        usize::from(self.0)
    }

    /// Button letter for this option.
    #[must_use]
    pub fn letter(&self) -> char {
        char::from(b'A' + self.0)
    }
}

impl TryFrom<u8> for QuestionIndex {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionIndex> for u8 {
    fn from(index: QuestionIndex) -> Self {
        index.0
    }
}

impl TryFrom<u8> for OptionIndex {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionIndex> for u8 {
    fn from(index: OptionIndex) -> Self {
        index.0
    }
}

impl fmt::Debug for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionIndex({})", self.0)
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionIndex({})", self.letter())
    }
}

impl fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_index_bounds() {
        assert_eq!(QuestionIndex::new(8).unwrap(), QuestionIndex::LAST);
        assert_eq!(
            QuestionIndex::new(9),
            Err(QuizError::QuestionOutOfRange(9))
        );
    }

    #[test]
    fn question_index_next_stops_after_last() {
        assert_eq!(QuestionIndex::FIRST.next().map(|i| i.value()), Some(1));
        assert_eq!(QuestionIndex::LAST.next(), None);
        assert!(QuestionIndex::LAST.is_last());
        assert_eq!(QuestionIndex::LAST.number(), 9);
    }

    #[test]
    fn option_index_bounds() {
        assert_eq!(OptionIndex::new(3).unwrap(), OptionIndex::D);
        assert_eq!(OptionIndex::new(4), Err(QuizError::OptionOutOfRange(4)));
    }

    #[test]
    fn option_letters() {
        let letters: String = OptionIndex::ALL.iter().map(OptionIndex::letter).collect();
        assert_eq!(letters, "ABCD");
        assert_eq!(OptionIndex::C.to_string(), "C");
    }

    #[test]
    fn serde_rejects_out_of_range_values() {
        let parsed: OptionIndex = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, OptionIndex::C);
        assert!(serde_json::from_str::<OptionIndex>("7").is_err());
        assert!(serde_json::from_str::<QuestionIndex>("9").is_err());
    }
}
