use std::sync::Arc;

use quiz_core::model::{CategoryId, QuizStatus};
use quiz_core::{Intent, QuizPolicy};
use services::StaticSource;

use super::test_harness::{
    REWARD_URL, ViewHarness, ViewKind, setup_shell_harness, setup_view_harness,
};

async fn play(harness: &ViewHarness, intents: impl IntoIterator<Item = Intent>) {
    for intent in intents {
        harness.handle().dispatch(intent).await.expect("driver running");
    }
}

async fn answer_all(harness: &ViewHarness, options: [usize; 5]) {
    play(harness, [Intent::Start(CategoryId::new("uniswap"))]).await;
    for option in options {
        play(harness, [Intent::Select(option), Intent::Confirm, Intent::Advance]).await;
    }
}

/// Round-trips an always-ignored intent so everything sent before it has been applied.
async fn settle(harness: &mut ViewHarness) {
    harness.drive_async().await;
    play(harness, [Intent::Select(usize::MAX)]).await;
    harness.drive_async().await;
}

#[tokio::test(flavor = "current_thread")]
async fn hub_view_smoke_lists_categories() {
    let mut harness = setup_view_harness(ViewKind::Hub, QuizPolicy::classic()).await;
    harness.rebuild();
    let html = harness.render();

    for title in ["Uniswap", "Aave", "MakerDAO"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("5 Questions"), "missing count in {html}");
    assert_eq!(html.matches("Start Quiz").count(), 3, "{html}");
    // MakerDAO ships without briefing material.
    assert_eq!(html.matches(">Briefing<").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hub_view_smoke_resets_open_attempt() {
    let mut harness = setup_view_harness(ViewKind::Hub, QuizPolicy::classic()).await;
    play(&harness, [Intent::Start(CategoryId::new("aave"))]).await;

    harness.rebuild();
    settle(&mut harness).await;
    assert_eq!(harness.handle().snapshot().status, QuizStatus::Idle);
}

#[tokio::test(flavor = "current_thread")]
async fn briefing_view_smoke_renders_paragraphs() {
    let mut harness =
        setup_view_harness(ViewKind::Briefing("uniswap"), QuizPolicy::classic()).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Uniswap"), "missing title in {html}");
    assert_eq!(html.matches("briefing__paragraph").count(), 3, "{html}");
    assert!(html.contains("Start Quiz"), "missing start in {html}");

    settle(&mut harness).await;
    assert_eq!(harness.handle().snapshot().status, QuizStatus::Briefing);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("uniswap"), QuizPolicy::classic()).await;
    play(&harness, [Intent::Start(CategoryId::new("uniswap"))]).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing progress in {html}");
    assert!(html.contains("Section: UNISWAP"), "missing section in {html}");
    assert!(html.contains("Which invariant"), "missing question in {html}");
    assert!(html.contains("Confirm Selection"), "missing confirm in {html}");
    assert_eq!(html.matches("option--idle").count(), 4, "{html}");
    assert!(!html.contains("quiz-timer"), "classic mode has no timer: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_attempt_on_mount() {
    let mut harness = setup_view_harness(ViewKind::Quiz("maker"), QuizPolicy::classic()).await;
    harness.rebuild();
    settle(&mut harness).await;

    let snapshot = harness.handle().snapshot();
    assert_eq!(snapshot.status, QuizStatus::InProgress);
    assert_eq!(
        snapshot.category.as_ref().map(|c| c.id().as_str()),
        Some("maker")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_confirmed_feedback() {
    let mut harness = setup_view_harness(ViewKind::Quiz("uniswap"), QuizPolicy::classic()).await;
    // The first answer is option 1; pick option 3.
    play(
        &harness,
        [
            Intent::Start(CategoryId::new("uniswap")),
            Intent::Select(3),
            Intent::Confirm,
        ],
    )
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("option--correct"), "missing correct in {html}");
    assert!(html.contains("option--wrong"), "missing wrong in {html}");
    assert_eq!(html.matches("option--dimmed").count(), 2, "{html}");
    assert!(html.contains("Next Question"), "missing next in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reveals_secret_on_pass() {
    let mut harness = setup_view_harness(ViewKind::Quiz("uniswap"), QuizPolicy::classic()).await;
    answer_all(&harness, [1, 1, 0, 0, 0]).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Subject Mastered"), "missing headline in {html}");
    assert!(html.contains("3/5"), "missing score in {html}");
    assert!(html.contains("CONSTANT-PRODUCT"), "missing secret in {html}");
    assert!(html.contains(REWARD_URL), "missing reward link in {html}");
    assert!(html.contains("Visit rewards.example.org"), "missing host in {html}");
    assert!(!html.contains("Restart Assessment"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_offers_restart_on_fail() {
    let mut harness = setup_view_harness(ViewKind::Quiz("uniswap"), QuizPolicy::classic()).await;
    answer_all(&harness, [0, 0, 1, 0, 0]).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Assessment Failed"), "missing headline in {html}");
    assert!(html.contains("0/5"), "missing score in {html}");
    assert!(html.contains("Restart Assessment"), "missing restart in {html}");
    assert!(html.contains("Return to Hub"), "missing hub link in {html}");
    assert!(!html.contains("CONSTANT-PRODUCT"), "secret leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_lock_in_timed_mode() {
    let mut harness = setup_view_harness(ViewKind::Quiz("aave"), QuizPolicy::timed()).await;
    play(
        &harness,
        [Intent::Start(CategoryId::new("aave")), Intent::FocusLost],
    )
    .await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Attempt Locked"), "missing lock in {html}");
    assert!(html.contains("0:25"), "missing timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_rejects_unknown_category() {
    let mut harness = setup_view_harness(ViewKind::Quiz("nope"), QuizPolicy::classic()).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Unknown protocol: nope"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_stays_not_ready_on_bad_catalog() {
    let mut harness = setup_shell_harness(Arc::new(StaticSource::new("{ not json")));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("could not be loaded"), "missing error in {html}");
}
