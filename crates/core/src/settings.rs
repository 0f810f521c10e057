use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("seconds per question must be between 1 and 600, got {0}")]
    InvalidSecondsPerQuestion(u32),

    #[error("reveal delay must be greater than zero and at most 10s, got {0:?}")]
    InvalidRevealDelay(Duration),
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Timing knobs for a play-through.
///
/// The shipped game always runs with [`QuizSettings::default`]: 30 seconds per
/// question and a 2 second pause between locking in an answer and evaluating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    seconds_per_question: u32,
    reveal_delay: Duration,
}

impl QuizSettings {
    pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_secs(2);

    const MAX_SECONDS_PER_QUESTION: u32 = 600;
    const MAX_REVEAL_DELAY: Duration = Duration::from_secs(10);

    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSecondsPerQuestion` if the countdown is zero or above 600.
    /// Returns `SettingsError::InvalidRevealDelay` if the delay is zero or above 10 seconds.
    pub fn new(seconds_per_question: u32, reveal_delay: Duration) -> Result<Self, SettingsError> {
        if seconds_per_question == 0 || seconds_per_question > Self::MAX_SECONDS_PER_QUESTION {
            return Err(SettingsError::InvalidSecondsPerQuestion(seconds_per_question));
        }
        if reveal_delay.is_zero() || reveal_delay > Self::MAX_REVEAL_DELAY {
            return Err(SettingsError::InvalidRevealDelay(reveal_delay));
        }

        Ok(Self {
            seconds_per_question,
            reveal_delay,
        })
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            seconds_per_question: Self::DEFAULT_SECONDS_PER_QUESTION,
            reveal_delay: Self::DEFAULT_REVEAL_DELAY,
        }
    }
}
