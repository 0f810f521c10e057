use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::ids::{OptionIndex, QuestionIndex};
use crate::model::question::{Question, points_for, question};
use crate::settings::QuizSettings;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// The screen the session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, waiting for the player to start.
    Start,
    /// A question is on screen and the countdown is running.
    Playing,
    /// The last answer was right; waiting for the player to continue.
    AnswerCorrect,
    /// Wrong answer or time ran out. Only a restart leaves this phase.
    AnswerWrong,
    /// All nine questions answered. Only a restart leaves this phase.
    Winner,
}

impl Phase {
    /// Returns true for phases that can only be left through a restart.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::AnswerWrong | Phase::Winner)
    }
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Read-only copy of the session state handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub question_index: QuestionIndex,
    pub selected_answer: Option<OptionIndex>,
    pub score: u32,
    pub seconds_remaining: u32,
    pub answer_revealed: bool,
}

impl SessionSnapshot {
    /// The question at `question_index`.
    #[must_use]
    pub fn question(&self) -> &'static Question {
        question(self.question_index)
    }

    /// Returns true when answer buttons must not accept input.
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.phase != Phase::Playing || self.answer_revealed
    }
}

//
// ─── DEFERRED CALLBACKS ────────────────────────────────────────────────────────
//

/// Identifies one stay in `Playing` for one question.
///
/// Countdown ticks and reveal evaluations are scheduled against a round and
/// are ignored once the session has moved on to another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(u64);

impl RoundId {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Result of delivering one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belonged to a superseded round or the session left `Playing`.
    Ignored,
    /// One second was taken off and time remains.
    Running,
    /// The clock hit zero with no answer; the session is now `AnswerWrong`.
    TimedOut,
    /// The clock hit zero after an answer was locked in; the pending evaluation decides.
    Expired,
}

impl TickOutcome {
    /// Returns true if the countdown should keep ticking.
    #[must_use]
    pub fn keeps_running(self) -> bool {
        matches!(self, TickOutcome::Running)
    }
}

/// Outcome of evaluating a locked-in answer after the reveal delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct { awarded: u32 },
    Winner { awarded: u32 },
    Wrong,
}

//
// ─── STATE MACHINE ─────────────────────────────────────────────────────────────
//

/// The quiz session state machine.
///
/// Pure and synchronous: time enters only through [`SessionState::tick`] and
/// [`SessionState::evaluate`], which a driver calls on its own schedule.
#[derive(Debug, Clone)]
pub struct SessionState {
    settings: QuizSettings,
    phase: Phase,
    question_index: QuestionIndex,
    selected_answer: Option<OptionIndex>,
    score: u32,
    seconds_remaining: u32,
    answer_revealed: bool,
    round: RoundId,
}

impl SessionState {
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self {
            settings,
            phase: Phase::Start,
            question_index: QuestionIndex::FIRST,
            selected_answer: None,
            score: 0,
            seconds_remaining: settings.seconds_per_question(),
            answer_revealed: false,
            round: RoundId(0),
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Start;
        self.question_index = QuestionIndex::FIRST;
        self.selected_answer = None;
        self.score = 0;
        self.seconds_remaining = self.settings.seconds_per_question();
        self.answer_revealed = false;
        self.round = self.round.next();
    }

    /// Begins a new play-through at the first question. Always succeeds.
    pub fn start_game(&mut self) {
        self.reset();
        self.phase = Phase::Playing;
    }

    /// Locks in an answer for the current question.
    ///
    /// The evaluation happens later through [`SessionState::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside `Playing` and
    /// `QuizError::InputLocked` if an answer was already chosen.
    pub fn select_answer(&mut self, answer: OptionIndex) -> Result<(), QuizError> {
        if self.phase != Phase::Playing {
            return Err(QuizError::WrongPhase {
                action: "select_answer",
                phase: self.phase,
            });
        }
        if self.answer_revealed || self.selected_answer.is_some() {
            return Err(QuizError::InputLocked);
        }

        self.selected_answer = Some(answer);
        self.answer_revealed = true;
        Ok(())
    }

    /// Scores the locked-in answer for `round`.
    ///
    /// Returns `None` when the round is stale, the session is not playing, or no
    /// answer was chosen.
    pub fn evaluate(&mut self, round: RoundId) -> Option<Verdict> {
        if round != self.round || self.phase != Phase::Playing {
            return None;
        }
        let selected = self.selected_answer?;

        if !question(self.question_index).is_correct(selected) {
            self.phase = Phase::AnswerWrong;
            return Some(Verdict::Wrong);
        }

        let awarded = points_for(self.question_index);
        self.score = self.score.saturating_add(awarded);
        if self.question_index.is_last() {
            self.phase = Phase::Winner;
            Some(Verdict::Winner { awarded })
        } else {
            self.phase = Phase::AnswerCorrect;
            Some(Verdict::Correct { awarded })
        }
    }

    /// Takes one second off the countdown for `round`.
    pub fn tick(&mut self, round: RoundId) -> TickOutcome {
        if round != self.round || self.phase != Phase::Playing || self.seconds_remaining == 0 {
            return TickOutcome::Ignored;
        }

        self.seconds_remaining -= 1;
        if self.seconds_remaining > 0 {
            return TickOutcome::Running;
        }

        // A locked-in answer wins over the timeout.
        if self.answer_revealed {
            TickOutcome::Expired
        } else {
            self.phase = Phase::AnswerWrong;
            TickOutcome::TimedOut
        }
    }

    /// Moves on from `AnswerCorrect` to the following question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside `AnswerCorrect`.
    pub fn next_question(&mut self) -> Result<(), QuizError> {
        if self.phase != Phase::AnswerCorrect {
            return Err(QuizError::WrongPhase {
                action: "next_question",
                phase: self.phase,
            });
        }
        // The last question leads to `Winner`, never `AnswerCorrect`.
        let next = self
            .question_index
            .next()
            .ok_or(QuizError::QuestionOutOfRange(self.question_index.number()))?;

        self.phase = Phase::Playing;
        self.question_index = next;
        self.selected_answer = None;
        self.answer_revealed = false;
        self.seconds_remaining = self.settings.seconds_per_question();
        self.round = self.round.next();
        Ok(())
    }

    /// Returns to the title screen with every field reset. Valid from any phase.
    pub fn restart_game(&mut self) {
        self.reset();
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            question_index: self.question_index,
            selected_answer: self.selected_answer,
            score: self.score,
            seconds_remaining: self.seconds_remaining,
            answer_revealed: self.answer_revealed,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(QuizSettings::default())
    }
}
