use std::sync::Arc;

use quiz_core::model::{Answer, CategoryId, QuizStatus};
use quiz_core::{Intent, QuizPolicy};
use services::{
    CatalogError, FileSource, QuizService, SessionDriver, SessionHandle, StaticSource,
    load_catalog,
};

const FIXTURE: &str = include_str!("fixtures/protocols.json");

async fn spawn_driver(policy: QuizPolicy) -> SessionHandle {
    let catalog = load_catalog(&StaticSource::new(FIXTURE), &policy)
        .await
        .expect("fixture catalog");
    SessionDriver::spawn(QuizService::new(Arc::new(catalog), policy))
}

async fn answer(handle: &SessionHandle, option: usize) {
    for intent in [Intent::Select(option), Intent::Confirm, Intent::Advance] {
        handle.dispatch(intent).await.expect("driver running");
    }
}

#[tokio::test]
async fn file_source_loads_the_fixture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/protocols.json");
    let catalog = load_catalog(&FileSource::new(path), &QuizPolicy::classic())
        .await
        .expect("load fixture from disk");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.total_questions(), 10);
    let first = catalog.iter().next().expect("first category");
    assert_eq!(first.id().as_str(), "core");
    assert_eq!(first.briefing().len(), 1);
}

#[tokio::test]
async fn catalog_with_short_category_is_rejected() {
    let json = r#"[{
        "id": "short", "title": "Short", "description": "", "secretWord": "x",
        "questions": [
            { "id": "q1", "text": "Only one", "options": ["a", "b"], "correctAnswerIndex": 0 }
        ]
    }]"#;
    let err = load_catalog(&StaticSource::new(json), &QuizPolicy::classic())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)), "unexpected {err:?}");
}

#[tokio::test]
async fn three_correct_answers_pass_and_reveal_secret() {
    let handle = spawn_driver(QuizPolicy::classic()).await;
    handle
        .dispatch(Intent::Start(CategoryId::new("core")))
        .await
        .unwrap();

    // Key is A, B, C, D, A: right on the first three, wrong on the last two.
    for option in [0, 1, 2, 0, 1] {
        answer(&handle, option).await;
    }

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.status, QuizStatus::Completed);
    assert_eq!(snapshot.answers.len(), 5);
    assert_eq!(snapshot.score, 3);
    assert!(snapshot.is_passed());
    assert_eq!(snapshot.secret_word(), Some("OPEN-SESAME"));
}

#[tokio::test]
async fn two_correct_answers_fail_and_restart_is_fresh() {
    let handle = spawn_driver(QuizPolicy::classic()).await;
    handle
        .dispatch(Intent::Start(CategoryId::new("core")))
        .await
        .unwrap();
    for option in [0, 1, 0, 0, 1] {
        answer(&handle, option).await;
    }

    let failed = handle.snapshot();
    assert!(failed.is_completed());
    assert_eq!(failed.score, 2);
    assert!(!failed.is_passed());
    assert_eq!(failed.secret_word(), None);

    let restarted = handle
        .dispatch(Intent::Start(CategoryId::new("core")))
        .await
        .unwrap();
    assert_eq!(restarted.status, QuizStatus::InProgress);
    assert!(restarted.answers.is_empty());
    assert_eq!(restarted.question_index, 0);
    assert_eq!(restarted.score, 0);
}

#[tokio::test]
async fn return_to_hub_clears_the_session() {
    let handle = spawn_driver(QuizPolicy::classic()).await;
    handle
        .dispatch(Intent::Start(CategoryId::new("extra")))
        .await
        .unwrap();
    answer(&handle, 0).await;

    let idle = handle.dispatch(Intent::Reset).await.unwrap();
    assert_eq!(idle.status, QuizStatus::Idle);
    assert!(idle.category.is_none());
    assert!(idle.answers.is_empty());
}

#[tokio::test]
async fn invalid_intents_are_silent_no_ops() {
    let handle = spawn_driver(QuizPolicy::classic()).await;
    let idle = handle.dispatch(Intent::Confirm).await.unwrap();
    assert_eq!(idle.status, QuizStatus::Idle);

    let started = handle
        .dispatch(Intent::Start(CategoryId::new("core")))
        .await
        .unwrap();
    let after_confirm = handle.dispatch(Intent::Confirm).await.unwrap();
    assert_eq!(after_confirm, started);
    let after_advance = handle.dispatch(Intent::Advance).await.unwrap();
    assert_eq!(after_advance, started);

    handle.dispatch(Intent::Select(2)).await.unwrap();
    let once = handle.dispatch(Intent::Confirm).await.unwrap();
    let twice = handle.dispatch(Intent::Confirm).await.unwrap();
    assert_eq!(once, twice);
    assert!(twice.answers.is_empty());
    assert_eq!(twice.selected_option, Some(2));
}

#[tokio::test]
async fn briefing_then_start() {
    let handle = spawn_driver(QuizPolicy::classic()).await;
    let briefing = handle
        .dispatch(Intent::Brief(CategoryId::new("core")))
        .await
        .unwrap();
    assert_eq!(briefing.status, QuizStatus::Briefing);
    assert_eq!(
        briefing.category.as_ref().map(|c| c.briefing().len()),
        Some(1)
    );

    let started = handle
        .dispatch(Intent::Start(CategoryId::new("core")))
        .await
        .unwrap();
    assert_eq!(started.status, QuizStatus::InProgress);
    assert_eq!(started.question().map(|q| q.text()), Some("First"));
}

#[tokio::test]
async fn subscribers_see_each_transition() {
    let handle = spawn_driver(QuizPolicy::classic()).await;
    let mut rx = handle.subscribe();

    handle.send(Intent::Start(CategoryId::new("core"))).unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().status, QuizStatus::InProgress);

    handle.send(Intent::Select(3)).unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().selected_option, Some(3));
}

#[tokio::test]
async fn recorded_answers_use_option_indices() {
    let handle = spawn_driver(QuizPolicy::classic()).await;
    handle
        .dispatch(Intent::Start(CategoryId::new("core")))
        .await
        .unwrap();
    answer(&handle, 3).await;
    answer(&handle, 1).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.answers, vec![Answer::Chosen(3), Answer::Chosen(1)]);
    assert_eq!(snapshot.answers.len(), snapshot.question_index);
    assert_eq!(snapshot.score, 1);
}
