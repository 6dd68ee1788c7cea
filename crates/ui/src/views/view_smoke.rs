use std::time::Duration;

use humbug_core::game::EffectTimings;
use humbug_core::model::{BankNumber, SessionId};
use humbug_core::testing::{RIGHT, WRONG};

use super::test_harness::{ViewHarness, setup_view_harness, setup_view_harness_with_timings};

async fn started() -> ViewHarness {
    start(setup_view_harness()).await
}

async fn start(mut harness: ViewHarness) -> ViewHarness {
    harness.rebuild();
    harness
        .game
        .start_session(SessionId::new(1), BankNumber::first())
        .await
        .expect("start session");
    harness.drive_async().await;
    harness
}

async fn answer(harness: &mut ViewHarness, choice: usize) {
    harness.game.submit_answer(choice).expect("answer");
    harness.settle().await;
}

#[tokio::test(flavor = "current_thread")]
async fn lobby_view_smoke_renders_session_cards() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("HUMBUG"), "missing title in {html}");
    assert!(html.contains("NO MERCY"), "missing rules in {html}");
    assert!(html.contains("Value Creation"), "missing session in {html}");
    assert!(html.contains("Positioning"), "missing session in {html}");
    assert!(html.contains("BANK 1"), "missing bank button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_question_and_meter() {
    let harness = started().await;

    let html = harness.render();
    assert!(html.contains("SESSION 1.1"), "missing session label in {html}");
    assert!(html.contains("Q1/10"), "missing question label in {html}");
    assert!(html.contains("0 CORRECT"), "missing tally in {html}");
    assert!(html.contains("Prompt for b1-q1?"), "missing prompt in {html}");
    assert!(html.contains("Choice D"), "missing choices in {html}");
    assert!(html.contains("INFERNO"), "missing meter label in {html}");
    assert!(html.contains("ABORT"), "missing abort in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_overlay_with_locked_answers() {
    let slow = EffectTimings {
        correct_reaction: Duration::from_secs(60),
        wrong_reaction: Duration::from_secs(60),
        insight: Duration::from_secs(60),
    };
    let mut harness = start(setup_view_harness_with_timings(slow)).await;
    harness.game.submit_answer(WRONG).expect("answer");
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your career burns"), "missing overlay in {html}");
    assert!(html.contains("disabled"), "answers should be disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_clears_effects_and_advances() {
    let mut harness = started().await;
    answer(&mut harness, WRONG).await;
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("Your career burns"), "overlay should clear in {html}");
    assert!(html.contains("Q2/10"), "missing next question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_verdict_and_brief() {
    let mut harness = started().await;
    for _ in 0..9 {
        answer(&mut harness, RIGHT).await;
    }
    answer(&mut harness, WRONG).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("VERDICT"), "missing verdict in {html}");
    assert!(html.contains("ACCURACY"), "missing accuracy in {html}");
    assert!(html.contains("CLEARANCE"), "missing clearance in {html}");
    assert!(html.contains("The Private Brief"), "missing brief title in {html}");
    assert!(html.contains("Your strategic acumen"), "missing brief text in {html}");
    assert!(html.contains("EXIT TO LOBBY"), "missing exit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wasted_view_smoke_hides_overlay() {
    let mut harness = started().await;
    for _ in 0..3 {
        answer(&mut harness, WRONG).await;
    }

    let html = harness.render();
    assert!(html.contains("WASTED"), "missing wasted in {html}");
    assert!(html.contains("EXIT IN SHAME"), "missing exit in {html}");
    assert!(!html.contains("overlay-body"), "overlay should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ipo_view_smoke_renders_after_perfect_bank() {
    let mut harness = started().await;
    for _ in 0..10 {
        answer(&mut harness, RIGHT).await;
    }

    let html = harness.render();
    assert!(html.contains("STRATEGIC ASCENSION COMPLETE"), "missing ipo in {html}");
    assert!(html.contains("RETIRE TO NAPA"), "missing exit in {html}");

    harness.game.return_to_lobby().expect("return");
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("BANK 2"), "progress should advance in {html}");
}
