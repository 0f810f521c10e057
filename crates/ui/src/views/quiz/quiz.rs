use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::model::Phase;

use crate::context::AppContext;
use crate::vm::{QuizIntent, ScreenVm, apply_intent, intent_for_key, map_screen};

use super::screens::{CorrectScreen, PlayingScreen, StartScreen, WinnerScreen, WrongScreen};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.quiz_session();
    let settings = session.settings();

    let snapshot = use_signal(|| session.snapshot());

    {
        let session = Arc::clone(&session);
        use_future(move || {
            let mut updates = session.subscribe();
            let mut snapshot = snapshot;
            async move {
                loop {
                    let next = *updates.borrow_and_update();
                    if *snapshot.peek() != next {
                        snapshot.set(next);
                    }
                    if updates.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    let dispatch_intent = {
        let session = Arc::clone(&session);
        use_callback(move |intent: QuizIntent| apply_intent(&session, intent))
    };

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = evt.data.key().to_string();
        let intent = intent_for_key(&snapshot.read(), &key);
        if let Some(intent) = intent {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    // Keep keyboard focus on the game so shortcuts work without clicking first.
    let mut last_focus_phase = use_signal(|| None::<Phase>);
    use_effect(move || {
        let phase = snapshot.read().phase;
        if last_focus_phase() == Some(phase) {
            return;
        }
        last_focus_phase.set(Some(phase));
        let _ = eval("document.getElementById(\"quiz-root\")?.focus();");
    });

    let screen = map_screen(&snapshot.read(), &settings);

    rsx! {
        div { class: "game-container", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match screen {
                ScreenVm::Start(vm) => rsx! {
                    StartScreen { vm, on_intent: dispatch_intent }
                },
                ScreenVm::Playing(vm) => rsx! {
                    PlayingScreen { vm, on_intent: dispatch_intent }
                },
                ScreenVm::Correct(vm) => rsx! {
                    CorrectScreen { vm, on_intent: dispatch_intent }
                },
                ScreenVm::Wrong(vm) => rsx! {
                    WrongScreen { vm, on_intent: dispatch_intent }
                },
                ScreenVm::Winner(vm) => rsx! {
                    WinnerScreen { vm, on_intent: dispatch_intent }
                },
            }
        }
    }
}
