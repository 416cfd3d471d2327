//! Task aggregate root.

use super::{DueDate, TaskFields, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single stored task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<DueDate>,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DueDate>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from validated fields.
    ///
    /// The identifier and creation timestamp are assigned here; the
    /// completion flag comes from the field set, which defaults it to
    /// `false` when the input never supplied one.
    #[must_use]
    pub fn new(fields: TaskFields, clock: &impl Clock) -> Self {
        let (title, description, due_date, completed) = fields.into_parts();
        Self {
            id: TaskId::new(),
            title,
            description,
            due_date,
            completed,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces every mutable field with the validated values.
    ///
    /// Full-overwrite semantics: optional fields absent from the input are
    /// cleared, not preserved. Identifier and creation timestamp are
    /// untouched.
    pub fn apply_fields(&mut self, fields: TaskFields) {
        let (title, description, due_date, completed) = fields.into_parts();
        self.title = title;
        self.description = description;
        self.due_date = due_date;
        self.completed = completed;
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
