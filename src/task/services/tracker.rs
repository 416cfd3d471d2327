//! Service layer for task create, list, update, delete, and toggle.

use crate::task::{
    domain::{RawTaskFields, Task, TaskDomainError, TaskFields, TaskId},
    ports::{TaskListNotifier, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task from form input.
///
/// Creation never supplies a completion flag; new tasks always start
/// incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title field.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date in its textual form.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    fn into_raw(self) -> RawTaskFields {
        RawTaskFields {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            completed: None,
        }
    }
}

/// Request payload for a full-field task update.
///
/// Every stored field is replaced by the validated values; optional fields
/// left unset here are cleared on the record, not preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<String>,
    completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Creates a request with the required title field.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            completed: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date in its textual form.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the completion flag explicitly. Leaving it unset clears the
    /// stored flag to `false`.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    fn into_raw(self) -> RawTaskFields {
        RawTaskFields {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            completed: self.completed,
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskTrackerError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed, including missing records.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskTrackerResult<T> = Result<T, TaskTrackerError>;

/// Task orchestration service.
///
/// Every mutating operation follows the same sequence: validate input,
/// persist through the repository port, raise one change signal through the
/// notifier port, report a typed result.
#[derive(Clone)]
pub struct TaskTrackerService<R, N, C>
where
    R: TaskRepository,
    N: TaskListNotifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<R, N, C> TaskTrackerService<R, N, C>
where
    R: TaskRepository,
    N: TaskListNotifier,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            notifier,
            clock,
        }
    }

    /// Creates a task from form input.
    ///
    /// The identifier and creation timestamp are server-assigned and the
    /// task starts incomplete. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError`] when validation fails or the repository
    /// rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskTrackerResult<Task> {
        let fields = TaskFields::parse(request.into_raw())?;
        let task = Task::new(fields, &*self.clock);
        self.repository.insert(&task).await?;
        self.notifier.notify_changed();
        Ok(task)
    }

    /// Lists all tasks, newest first.
    ///
    /// Read failures degrade to an empty list instead of erroring: callers
    /// always receive something renderable. The failure is logged at WARN.
    pub async fn list_tasks(&self) -> Vec<Task> {
        match self.repository.list_recent_first().await {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(error = %err, "task list read failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Replaces every field of the task identified by `id`.
    ///
    /// Optional fields absent from the request are cleared, not preserved.
    /// Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError`] when validation fails, the task does not
    /// exist, or the repository rejects persistence.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskTrackerResult<Task> {
        let fields = TaskFields::parse(request.into_raw())?;
        let mut task = self
            .repository
            .fetch(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply_fields(fields);
        self.repository.replace(&task).await?;
        self.notifier.notify_changed();
        Ok(task)
    }

    /// Removes the task identified by `id`.
    ///
    /// Deleting an unknown identifier still succeeds: delete is idempotent
    /// from the caller's perspective, and the change signal is raised either
    /// way so stale views refresh.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError::Repository`] only for infrastructure
    /// failures.
    pub async fn delete_task(&self, id: TaskId) -> TaskTrackerResult<()> {
        let _removed: bool = self.repository.remove(id).await?;
        self.notifier.notify_changed();
        Ok(())
    }

    /// Flips the completion flag of the task identified by `id`.
    ///
    /// The flip is a read-modify-write, not an atomic storage operation:
    /// two concurrent toggles on the same id can both read the same flag and
    /// one signal is lost. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task
    /// does not exist, or [`TaskTrackerError::Repository`] on persistence
    /// failure.
    pub async fn toggle_task(&self, id: TaskId) -> TaskTrackerResult<Task> {
        let mut task = self
            .repository
            .fetch(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.toggle_completed();
        self.repository.replace(&task).await?;
        self.notifier.notify_changed();
        Ok(task)
    }
}
