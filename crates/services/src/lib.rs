#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_session;

pub use quiz_core::model::{OptionIndex, Phase, QuestionIndex, SessionSnapshot};
pub use quiz_core::{QuizError, QuizSettings};

pub use error::SessionError;
pub use quiz_session::QuizSession;
