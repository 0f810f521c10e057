#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod settings;

pub use error::QuizError;
pub use settings::{QuizSettings, SettingsError};
