use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::ReadableExt;
use sensei_core::model::{TopicId, TopicProgress};
use sensei_core::time::fixed_now;
use storage::repository::{ProgressRepository, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_groups_and_course_progress() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness
        .progress
        .mark_completed(TopicId::Tables)
        .await
        .expect("mark completed");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Locator Strategies"), "missing group in {html}");
    assert!(html.contains("Challenges"), "missing group in {html}");
    assert!(html.contains("1 of 19 modules completed"), "missing count in {html}");
    assert!(html.contains("5%"), "missing percentage in {html}");
    assert!(html.contains("Completed"), "missing badge in {html}");
    assert!(html.contains("/modules/tables"), "missing topic link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_layout_and_tracker() {
    let mut harness = setup_view_harness(ViewKind::Topic("windows".into()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Back to Modules"), "missing back link in {html}");
    assert!(html.contains("Learning Objectives"), "missing objectives in {html}");
    assert!(html.contains("Practice"), "missing tab in {html}");
    assert!(html.contains("Opened new window"), "missing action in {html}");
    assert!(html.contains("Progress Tracker"), "missing tracker in {html}");
    assert!(html.contains("0 of 2 actions"), "missing summary in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tables_topic_renders_dynamic_table() {
    let mut harness = setup_view_harness(ViewKind::Topic("tables".into()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("omar.qa@example.com"), "missing row in {html}");
    assert!(html.contains("Recent activity"), "missing feed in {html}");
    assert!(html.contains("Sorted a column"), "missing tracker item in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_topic_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Topic("playwright".into()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Module not found"), "missing message in {html}");
    assert!(html.contains("modules/playwright"), "missing path in {html}");
    assert!(html.contains("Back to Modules"), "missing home link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn catch_all_route_renders_not_found() {
    let mut harness =
        setup_view_harness(ViewKind::NotFound(vec!["nowhere".into(), "at-all".into()]));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("nowhere/at-all"), "missing path in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completing_every_action_persists_progress() {
    let mut harness = setup_view_harness(ViewKind::Topic("windows".into()));
    harness.rebuild();

    harness.log("open");
    harness.drive_async().await;
    harness.drive_async().await;
    assert!(harness.render().contains("1 of 2 actions"));
    assert!(
        harness
            .progress
            .get(TopicId::Windows)
            .await
            .unwrap()
            .is_none()
    );

    harness.log("switch");
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("Module completed"), "missing banner in {html}");

    let stored = harness.progress.get(TopicId::Windows).await.unwrap();
    assert_eq!(
        stored,
        Some(TopicProgress::completed_at(TopicId::Windows, fixed_now()))
    );
    let session = harness.topic_handles.session();
    assert!(harness.dom.in_runtime(|| session.read().as_ref().is_ok_and(|s| s.completion_recorded())));
}

struct FailingRepo;

#[async_trait]
impl ProgressRepository for FailingRepo {
    async fn get_progress(&self, _topic: TopicId) -> Result<Option<TopicProgress>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn put_progress(
        &self,
        _key: TopicId,
        _progress: &TopicProgress,
    ) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_progress(&self) -> Result<Vec<TopicProgress>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_repo(ViewKind::Home, Arc::new(FailingRepo));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
