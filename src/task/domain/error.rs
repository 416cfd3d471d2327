//! Error types for task field validation.

use thiserror::Error;

/// Errors returned while validating raw task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The due date value could not be parsed as a calendar date.
    #[error("invalid due date '{0}', expected an RFC 3339 timestamp or YYYY-MM-DD")]
    InvalidDueDate(String),
}
