use thiserror::Error;

use crate::model::Phase;

/// Precondition failures reported by the session state machine.
///
/// None of these leave the session in a modified state; callers are free to
/// treat them as no-ops.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option index {0} is out of range (expected 0-3)")]
    OptionOutOfRange(u8),

    #[error("question index {0} is out of range (expected 0-8)")]
    QuestionOutOfRange(u8),

    #[error("an answer has already been locked in for this question")]
    InputLocked,

    #[error("{action} is not valid while the session is in {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },
}
