//! Change-signal observation tests for list subscribers.

use super::helpers::{TestBed, bed};
use rstest::rstest;
use taskboard::task::services::{CreateTaskRequest, UpdateTaskRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscriber_observes_each_mutation(bed: TestBed) {
    let TestBed {
        service,
        mut watcher,
    } = bed;

    let created = service
        .create_task(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("task creation should succeed");
    watcher
        .changed()
        .await
        .expect("create should raise a change signal");

    service
        .update_task(created.id(), UpdateTaskRequest::new("Buy oat milk"))
        .await
        .expect("task update should succeed");
    watcher
        .changed()
        .await
        .expect("update should raise a change signal");

    service
        .toggle_task(created.id())
        .await
        .expect("task toggle should succeed");
    watcher
        .changed()
        .await
        .expect("toggle should raise a change signal");

    service
        .delete_task(created.id())
        .await
        .expect("task delete should succeed");
    watcher
        .changed()
        .await
        .expect("delete should raise a change signal");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reads_raise_no_change_signal(bed: TestBed) {
    let TestBed { service, watcher } = bed;

    let listed = service.list_tasks().await;

    assert!(listed.is_empty());
    assert!(!watcher.has_pending());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_delete_still_signals_a_refresh(bed: TestBed) {
    let TestBed { service, watcher } = bed;

    service
        .delete_task(taskboard::task::domain::TaskId::new())
        .await
        .expect("lenient delete should succeed");

    assert!(watcher.has_pending());
}
