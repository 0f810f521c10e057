mod quiz_vm;
mod score_fmt;

pub use quiz_vm::{
    AnswerOptionVm, CorrectVm, PlayingVm, QuizIntent, ScreenVm, StartVm, WinnerVm, WrongVm,
    apply_intent, intent_for_key, map_screen,
};
pub use score_fmt::format_points;
