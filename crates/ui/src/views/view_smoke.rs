use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::ReadableExt;
use quiz_core::model::{AnswerRecord, Question, QuestionId, QuestionRecord, QuizResults, Selection};
use quiz_core::time::fixed_now;
use services::{BEST_SCORE_KEY, FileQuestionSource, StaticQuestionSource};
use storage::repository::{KeyValueStore, Storage};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_storage,
};
use crate::vm::{QuizIntent, QuizVm};

fn records(count: u32) -> Vec<QuestionRecord> {
    (1..=count)
        .map(|n| {
            QuestionRecord::new(
                format!("What is item {n}?"),
                format!("correct{n}"),
                [format!("wrong{n}")],
            )
        })
        .collect()
}

fn finished_results() -> QuizResults {
    let questions: Vec<Question> = records(3)
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::from_record(QuestionId::from_index(index), record, |_| {}).unwrap()
        })
        .collect();
    let answers = vec![
        AnswerRecord::new(QuestionId::new(1), Selection::Chosen("correct1".into()), "correct1"),
        AnswerRecord::new(QuestionId::new(2), Selection::NoSelection, "correct2"),
        AnswerRecord::new(QuestionId::new(3), Selection::Chosen("wrong3".into()), "correct3"),
    ];
    QuizResults::new(questions, answers, fixed_now(), fixed_now())
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Arc::new(StaticQuestionSource::new(records(2))),
        None,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing position in {html}");
    assert!(html.contains("What is item 1?"), "missing question in {html}");
    assert!(html.contains("correct1"), "missing option in {html}");
    assert!(html.contains("wrong1"), "missing option in {html}");
    assert!(html.contains("30s"), "missing timer in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
}

fn seconds_left(harness: &ViewHarness) -> Option<u32> {
    let vm = harness.quiz_handles().vm();
    harness
        .dom
        .in_runtime(|| vm.peek().as_ref().and_then(QuizVm::timer_key))
        .map(|(_, seconds)| seconds)
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_counts_down_once_per_second() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Arc::new(StaticQuestionSource::new(records(2))),
        None,
    );
    harness.rebuild();
    harness.settle().await;
    assert_eq!(seconds_left(&harness), Some(30));

    harness.drive_for(Duration::from_millis(1_400)).await;

    let remaining = seconds_left(&harness).expect("quiz still running");
    assert!((28..=29).contains(&remaining), "unexpected countdown {remaining}");
    let html = harness.render();
    assert!(html.contains(&format!("{remaining}s")), "stale timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_keeps_counting_while_selecting() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Arc::new(StaticQuestionSource::new(records(2))),
        None,
    );
    harness.rebuild();
    harness.settle().await;
    let dispatch = harness.quiz_handles().dispatch();

    for round in 0..8 {
        let option = if round % 2 == 0 { "correct1" } else { "wrong1" };
        harness
            .dom
            .in_runtime(|| dispatch.call(QuizIntent::Select(option.to_string())));
        harness.drive_for(Duration::from_millis(200)).await;
    }

    let remaining = seconds_left(&harness).expect("quiz still running");
    assert!(remaining < 30, "countdown stalled at {remaining}");
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "unexpected advance in {html}");
    assert!(html.contains("option selected"), "selection lost in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_labels_single_question_as_finish() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Arc::new(StaticQuestionSource::new(records(1))),
        None,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 1"), "missing position in {html}");
    assert!(html.contains("Finish"), "missing finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Arc::new(StaticQuestionSource::new(Vec::new())),
        None,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No questions available."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_load_error() {
    let missing = PathBuf::from("/nonexistent/quiz-view-smoke/questions.json");
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Arc::new(FileQuestionSource::new(missing)),
        None,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Could not load questions. Please try again."),
        "missing load error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_report() {
    let storage = Storage::in_memory();
    storage.kv.set(BEST_SCORE_KEY, "2").await.expect("seed best");

    let mut harness = setup_view_harness_with_storage(
        ViewKind::Results,
        Arc::new(StaticQuestionSource::new(Vec::new())),
        Some(finished_results()),
        storage,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Your Score: 1/3"), "missing score in {html}");
    assert!(html.contains("Best: 2/3"), "missing best in {html}");
    assert!(html.contains("Incorrect"), "missing badge in {html}");
    assert!(html.contains("Your answer: No answer"), "missing no-answer row in {html}");
    assert!(html.contains("Correct answer: correct3"), "missing correction in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_without_handoff_restarts_quiz() {
    let mut harness = setup_view_harness(
        ViewKind::Results,
        Arc::new(StaticQuestionSource::new(records(2))),
        None,
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("quiz restarted"), "no redirect in {html}");
    assert!(!html.contains("Your Score"), "score shown without results in {html}");
}
