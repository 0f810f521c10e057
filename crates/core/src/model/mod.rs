mod ids;
mod question;
mod session;

pub use ids::{OPTION_COUNT, OptionIndex, QUESTION_COUNT, QuestionIndex};
pub use question::{POINTS_PER_STEP, QUESTIONS, Question, points_for, question};
pub use session::{Phase, RoundId, SessionSnapshot, SessionState, TickOutcome, Verdict};
