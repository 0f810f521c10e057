use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{OptionIndex, Phase};
use services::{QuizSession, QuizSettings};

use super::test_harness::setup_view_harness;

fn new_session() -> Arc<QuizSession> {
    Arc::new(QuizSession::new(QuizSettings::default()).expect("tokio runtime"))
}

/// Whether any option button carries a true `disabled` attribute.
fn has_locked_option(html: &str) -> bool {
    html.contains("disabled=true") || html.contains("disabled=\"true\"")
}

async fn wait_for_reveal() {
    tokio::time::sleep(Duration::from_millis(2_100)).await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn start_screen_smoke_renders_title_and_rules() {
    let mut harness = setup_view_harness(new_session());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Cultura de Paz"), "missing subtitle in {html}");
    assert!(
        html.contains("Tienes 30 segundos para cada pregunta."),
        "missing time rule in {html}"
    );
    assert!(html.contains("COMENZAR JUEGO"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn playing_screen_smoke_renders_question_and_options() {
    let session = new_session();
    session.start_game();

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Pregunta 1/9"), "missing progress in {html}");
    assert!(html.contains("30s"), "missing timer in {html}");
    assert!(html.contains("Por: $1,000"), "missing reward label in {html}");
    assert!(
        html.contains("¿Cuál es el símbolo universal de la paz?"),
        "missing prompt in {html}"
    );
    for option in ["Una rosa", "Una paloma", "Un corazón", "Una estrella"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
    assert!(!has_locked_option(&html), "options locked before a pick in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn reveal_smoke_highlights_and_locks_options() {
    let session = new_session();
    session.start_game();
    session.select_answer(OptionIndex::A).unwrap();

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("answer-option correct"), "missing correct class in {html}");
    assert!(html.contains("answer-option wrong"), "missing wrong class in {html}");
    assert!(has_locked_option(&html), "options not locked in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn correct_screen_smoke_renders_points() {
    let session = new_session();
    session.start_game();
    session.select_answer(OptionIndex::B).unwrap();
    wait_for_reveal().await;
    assert_eq!(session.snapshot().phase, Phase::AnswerCorrect);

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("+1,000 puntos"), "missing points in {html}");
    assert!(html.contains("SIGUIENTE PREGUNTA"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn wrong_screen_smoke_names_correct_answer() {
    let session = new_session();
    session.start_game();
    session.select_answer(OptionIndex::C).unwrap();
    wait_for_reveal().await;

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Respuesta Incorrecta"), "missing headline in {html}");
    assert!(html.contains("Una paloma"), "missing correct answer in {html}");
    assert!(html.contains("Puntuación Final: $0"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn view_follows_session_updates() {
    let session = new_session();
    let mut harness = setup_view_harness(Arc::clone(&session));
    harness.rebuild();
    assert!(harness.render().contains("COMENZAR JUEGO"));

    harness.session.start_game();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Pregunta 1/9"), "view did not switch to playing: {html}");

    harness.session.restart_game();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("COMENZAR JUEGO"), "view did not return to start: {html}");
}
