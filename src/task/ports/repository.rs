//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations serialize conflicting writes to the same record at the
/// storage layer; there is no version field, so concurrent writers follow
/// last-write-wins semantics.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Overwrites every field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn replace(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn fetch(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks ordered by creation time, newest first.
    ///
    /// Ties on the creation timestamp break by ascending identifier so the
    /// ordering is total.
    async fn list_recent_first(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task, reporting whether a record existed.
    ///
    /// Removing an unknown identifier is not an error; callers that want
    /// strict semantics can inspect the returned flag.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure, including unreachable storage.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
