//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional calendar due date.
    pub due_date: Option<NaiveDate>,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional calendar due date.
    pub due_date: Option<NaiveDate>,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Full-overwrite changeset for task records.
///
/// `treat_none_as_null` makes absent optionals clear the stored column
/// instead of leaving it untouched, matching the service's full-replacement
/// update contract.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description; `None` clears the column.
    pub description: Option<String>,
    /// Replacement due date; `None` clears the column.
    pub due_date: Option<NaiveDate>,
    /// Replacement completion flag.
    pub completed: bool,
}
