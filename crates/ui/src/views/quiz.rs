mod quiz;
mod screens;

pub use quiz::QuizView;
