//! In-memory integration tests for task CRUD behaviour.

use super::helpers::{TestBed, bed};
use rstest::rstest;
use taskboard::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskTrackerError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_listed_with_matching_fields(bed: TestBed) {
    let created = bed
        .service
        .create_task(
            CreateTaskRequest::new("Buy milk")
                .with_description("2 litres")
                .with_due_date("2026-08-10"),
        )
        .await
        .expect("task creation should succeed");

    let listed = bed.service.list_tasks().await;

    assert_eq!(listed.len(), 1);
    let task = listed.first().expect("one task should be listed");
    assert_eq!(task, &created);
    assert_eq!(task.title().as_str(), "Buy milk");
    assert_eq!(task.description(), Some("2 litres"));
    assert_eq!(
        task.due_date().map(|due| due.to_string()),
        Some("2026-08-10".to_owned())
    );
    assert!(!task.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_is_rejected_without_adding_a_record(bed: TestBed) {
    let result = bed.service.create_task(CreateTaskRequest::new("  ")).await;

    assert!(matches!(
        result,
        Err(TaskTrackerError::Domain(TaskDomainError::EmptyTitle))
    ));
    assert!(bed.service.list_tasks().await.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggling_twice_restores_the_original_flag(bed: TestBed) {
    let created = bed
        .service
        .create_task(CreateTaskRequest::new("Water plants"))
        .await
        .expect("task creation should succeed");

    bed.service
        .toggle_task(created.id())
        .await
        .expect("first toggle should succeed");
    bed.service
        .toggle_task(created.id())
        .await
        .expect("second toggle should succeed");

    let listed = bed.service.list_tasks().await;
    let task = listed.first().expect("task should still be listed");
    assert!(!task.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggling_an_unknown_id_errors_and_mutates_nothing(bed: TestBed) {
    let created = bed
        .service
        .create_task(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("task creation should succeed");
    let unknown = TaskId::new();

    let result = bed.service.toggle_task(unknown).await;

    assert!(matches!(
        result,
        Err(TaskTrackerError::Repository(TaskRepositoryError::NotFound(id))) if id == unknown
    ));
    assert_eq!(bed.service.list_tasks().await, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_never_reappears_in_the_list(bed: TestBed) {
    let created = bed
        .service
        .create_task(CreateTaskRequest::new("Write report"))
        .await
        .expect("task creation should succeed");

    bed.service
        .delete_task(created.id())
        .await
        .expect("task delete should succeed");

    let listed = bed.service.list_tasks().await;
    assert!(listed.iter().all(|task| task.id() != created.id()));
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_and_clears_omitted_optionals(bed: TestBed) {
    let created = bed
        .service
        .create_task(
            CreateTaskRequest::new("Buy milk")
                .with_description("2 litres")
                .with_due_date("2026-08-10"),
        )
        .await
        .expect("task creation should succeed");
    bed.service
        .toggle_task(created.id())
        .await
        .expect("toggle should succeed");

    let updated = bed
        .service
        .update_task(created.id(), UpdateTaskRequest::new("Buy oat milk"))
        .await
        .expect("task update should succeed");

    assert_eq!(updated.title().as_str(), "Buy oat milk");
    assert_eq!(updated.description(), None);
    assert_eq!(updated.due_date(), None);
    assert!(!updated.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_toggle_update_delete_walkthrough(bed: TestBed) {
    let created = bed
        .service
        .create_task(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("task creation should succeed");

    let listed = bed.service.list_tasks().await;
    assert_eq!(listed.len(), 1);
    let task = listed.first().expect("one task should be listed");
    assert!(!task.completed());
    assert_eq!(task.due_date(), None);

    bed.service
        .toggle_task(created.id())
        .await
        .expect("toggle should succeed");
    let toggled = bed.service.list_tasks().await;
    assert!(
        toggled
            .first()
            .expect("task should still be listed")
            .completed()
    );

    bed.service
        .update_task(
            created.id(),
            UpdateTaskRequest::new("Buy oat milk").with_completed(false),
        )
        .await
        .expect("update should succeed");
    let updated = bed.service.list_tasks().await;
    let task = updated.first().expect("task should still be listed");
    assert_eq!(task.title().as_str(), "Buy oat milk");
    assert!(!task.completed());

    bed.service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");
    assert!(bed.service.list_tasks().await.is_empty());
}
