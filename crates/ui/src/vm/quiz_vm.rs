use quiz_core::QuizSettings;
use quiz_core::model::{OptionIndex, Phase, QUESTION_COUNT, SessionSnapshot, points_for};
use services::QuizSession;
use tracing::debug;

use super::score_fmt::format_points;

/// Seconds left at which the timer switches to its warning style.
const LOW_TIME_SECS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(OptionIndex),
    Next,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub time_rule: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub index: OptionIndex,
    pub letter: char,
    pub text: &'static str,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayingVm {
    pub progress_label: String,
    pub timer_label: String,
    pub timer_class: &'static str,
    pub reward_label: String,
    pub score_label: String,
    pub prompt: &'static str,
    pub options: Vec<AnswerOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectVm {
    pub points_label: String,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrongVm {
    pub headline: &'static str,
    pub score_label: String,
    pub correct_answer: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerVm {
    pub score_label: String,
}

/// Everything a screen needs to render, keyed by phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start(StartVm),
    Playing(PlayingVm),
    Correct(CorrectVm),
    Wrong(WrongVm),
    Winner(WinnerVm),
}

fn score_label(score: u32) -> String {
    format!("${}", format_points(score))
}

/// CSS class for an answer button.
///
/// Before the reveal every option looks the same. Afterwards the correct option
/// is highlighted, and a wrong pick is marked as such.
fn option_class(snapshot: &SessionSnapshot, index: OptionIndex) -> &'static str {
    if !snapshot.answer_revealed {
        return "answer-option";
    }
    let correct = snapshot.question().correct();
    if index == correct {
        "answer-option correct"
    } else if snapshot.selected_answer == Some(index) {
        "answer-option wrong"
    } else {
        "answer-option"
    }
}

fn map_playing(snapshot: &SessionSnapshot) -> PlayingVm {
    let question = snapshot.question();
    let locked = snapshot.is_input_locked();
    let options = OptionIndex::ALL
        .into_iter()
        .map(|index| AnswerOptionVm {
            index,
            letter: index.letter(),
            text: question.option(index),
            class: option_class(snapshot, index),
            disabled: locked,
        })
        .collect();

    let timer_class = if snapshot.seconds_remaining <= LOW_TIME_SECS {
        "timer timer--low"
    } else {
        "timer"
    };

    PlayingVm {
        progress_label: format!(
            "Pregunta {}/{}",
            snapshot.question_index.number(),
            QUESTION_COUNT
        ),
        timer_label: format!("⏱️ {}s", snapshot.seconds_remaining),
        timer_class,
        reward_label: format!("Por: {}", question.reward_label()),
        score_label: format!("Puntuación: {}", score_label(snapshot.score)),
        prompt: question.text(),
        options,
    }
}

#[must_use]
pub fn map_screen(snapshot: &SessionSnapshot, settings: &QuizSettings) -> ScreenVm {
    match snapshot.phase {
        Phase::Start => ScreenVm::Start(StartVm {
            time_rule: format!(
                "Tienes {} segundos para cada pregunta.",
                settings.seconds_per_question()
            ),
        }),
        Phase::Playing => ScreenVm::Playing(map_playing(snapshot)),
        Phase::AnswerCorrect => ScreenVm::Correct(CorrectVm {
            points_label: format!(
                "+{} puntos",
                format_points(points_for(snapshot.question_index))
            ),
            score_label: format!("Puntuación: {}", score_label(snapshot.score)),
        }),
        Phase::AnswerWrong => ScreenVm::Wrong(WrongVm {
            headline: if snapshot.selected_answer.is_none() {
                "⌛ ¡Se acabó el tiempo!"
            } else {
                "😔 ¡Respuesta Incorrecta!"
            },
            score_label: format!("Puntuación Final: {}", score_label(snapshot.score)),
            correct_answer: snapshot.question().correct_option(),
        }),
        Phase::Winner => ScreenVm::Winner(WinnerVm {
            score_label: score_label(snapshot.score),
        }),
    }
}

/// Keyboard shortcut for the current phase, if `key` has one.
///
/// `key` is the DOM key value: a character such as `"b"` or a named key such as `"Enter"`.
#[must_use]
pub fn intent_for_key(snapshot: &SessionSnapshot, key: &str) -> Option<QuizIntent> {
    match snapshot.phase {
        Phase::Playing => {
            if snapshot.is_input_locked() {
                return None;
            }
            let index = match key {
                "a" | "A" | "1" => OptionIndex::A,
                "b" | "B" | "2" => OptionIndex::B,
                "c" | "C" | "3" => OptionIndex::C,
                "d" | "D" | "4" => OptionIndex::D,
                _ => return None,
            };
            Some(QuizIntent::Select(index))
        }
        Phase::Start if key == "Enter" => Some(QuizIntent::Start),
        Phase::AnswerCorrect if key == "Enter" => Some(QuizIntent::Next),
        phase if phase.is_terminal() && key == "Enter" => Some(QuizIntent::Restart),
        _ => None,
    }
}

/// Forwards a user intent to the session.
///
/// Rejected intents (a second click, a stale key press) are dropped here; the
/// session logs why.
pub fn apply_intent(session: &QuizSession, intent: QuizIntent) {
    let result = match intent {
        QuizIntent::Start => {
            session.start_game();
            Ok(())
        }
        QuizIntent::Select(index) => session.select_answer(index),
        QuizIntent::Next => session.next_question(),
        QuizIntent::Restart => {
            session.restart_game();
            Ok(())
        }
    };
    if result.is_err() {
        debug!(?intent, "intent dropped");
    }
}
