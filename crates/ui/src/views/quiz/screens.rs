use dioxus::prelude::*;

use crate::vm::{CorrectVm, PlayingVm, QuizIntent, StartVm, WinnerVm, WrongVm};

#[component]
pub(super) fn StartScreen(vm: StartVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "start-screen",
            h1 { class: "game-title", "🕊️ ¿QUIÉN QUIERE SER MILLONARIO? 🕊️" }
            h2 { class: "game-subtitle", "Edición: Cultura de Paz" }
            div { class: "peace-symbols",
                span { class: "symbol", "☮️" }
                span { class: "symbol", "🌍" }
                span { class: "symbol", "🤝" }
            }
            p { class: "instructions", "Responde nueve preguntas sobre paz y no violencia." }
            p { class: "instructions", "{vm.time_rule}" }
            p { class: "instructions", "Cada acierto vale más que el anterior." }
            button {
                class: "start-button",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "▶️ COMENZAR JUEGO"
            }
        }
    }
}

#[component]
pub(super) fn PlayingScreen(vm: PlayingVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let options = vm.options.iter().map(|option| {
        let index = option.index;
        rsx! {
            button {
                key: "{option.letter}",
                class: "{option.class}",
                r#type: "button",
                disabled: option.disabled,
                onclick: move |_| on_intent.call(QuizIntent::Select(index)),
                span { class: "answer-letter", "{option.letter}" }
                span { class: "answer-text", "{option.text}" }
            }
        }
    });

    rsx! {
        div { class: "game-header",
            div { class: "progress-info",
                span { class: "question-number", "{vm.progress_label}" }
                span { class: "{vm.timer_class}", "{vm.timer_label}" }
            }
            div { class: "current-value", "{vm.reward_label}" }
            div { class: "score", "{vm.score_label}" }
        }
        div { class: "question-container",
            h2 { class: "question", "{vm.prompt}" }
            div { class: "answers-grid", {options} }
        }
    }
}

#[component]
pub(super) fn CorrectScreen(vm: CorrectVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "result-screen correct",
            h1 { class: "result-title", "✅ ¡Correcto!" }
            div { class: "points-earned", "{vm.points_label}" }
            div { class: "current-score", "{vm.score_label}" }
            p { class: "correct-message", "¡Muy bien! Sigues sumando por la paz." }
            button {
                class: "next-button",
                id: "quiz-next",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "➡️ SIGUIENTE PREGUNTA"
            }
        }
    }
}

#[component]
pub(super) fn WrongScreen(vm: WrongVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "result-screen wrong",
            h1 { class: "result-title", "{vm.headline}" }
            div { class: "final-score", "{vm.score_label}" }
            p { class: "wrong-message",
                "La respuesta correcta era: "
                strong { "{vm.correct_answer}" }
            }
            p { class: "encouragement", "Cada pregunta es una oportunidad para aprender más sobre la paz." }
            button {
                class: "restart-button",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "🔄 INTENTAR DE NUEVO"
            }
        }
    }
}

#[component]
pub(super) fn WinnerScreen(vm: WinnerVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "result-screen winner",
            h1 { class: "result-title", "🎉 ¡FELICIDADES! 🎉" }
            h2 { class: "result-subtitle", "¡ERES UN MILLONARIO DE LA PAZ!" }
            div { class: "final-score", "{vm.score_label}" }
            p { class: "winner-message", "Respondiste las nueve preguntas. Gracias por construir un mundo más pacífico." }
            button {
                class: "restart-button",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "🔄 JUGAR DE NUEVO"
            }
        }
    }
}
