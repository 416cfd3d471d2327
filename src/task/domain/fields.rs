//! Validated field values for task records.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar due date. Time-of-day carries no meaning for task scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Creates a due date from a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a due date from its textual form.
    ///
    /// Accepts an RFC 3339 timestamp (the shape browser date pickers submit)
    /// or a plain `YYYY-MM-DD` date. Timestamps are reduced to their UTC
    /// calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] for any other shape.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let normalized = value.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(normalized) {
            return Ok(Self(timestamp.to_utc().date_naive()));
        }
        NaiveDate::parse_from_str(normalized, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDueDate(value.to_owned()))
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Untyped task input as submitted by a form or API caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTaskFields {
    /// Raw title text.
    pub title: String,
    /// Raw description text, if provided.
    #[serde(default)]
    pub description: Option<String>,
    /// Raw due date text, if provided.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Completion flag, if provided. Absent coerces to `false`.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Validated task field set produced from [`RawTaskFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<DueDate>,
    completed: bool,
}

impl TaskFields {
    /// Validates raw input into a well-formed field set.
    ///
    /// Validation is pure and synchronous: no I/O, deterministic for
    /// identical input. Blank optional values normalize to absent, and an
    /// absent completion flag coerces to `false` (create never supplies one;
    /// update treats absence as cleared under full-overwrite semantics).
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::InvalidDueDate`] when a field fails validation.
    pub fn parse(raw: RawTaskFields) -> Result<Self, TaskDomainError> {
        let title = TaskTitle::new(raw.title)?;
        let description = raw.description.and_then(|value| {
            let normalized = value.trim();
            (!normalized.is_empty()).then(|| normalized.to_owned())
        });
        let due_date = raw
            .due_date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(DueDate::parse)
            .transpose()?;

        Ok(Self {
            title,
            description,
            due_date,
            completed: raw.completed.unwrap_or(false),
        })
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the normalized description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the parsed due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Decomposes the field set for aggregate construction.
    #[must_use]
    pub(crate) fn into_parts(self) -> (TaskTitle, Option<String>, Option<DueDate>, bool) {
        (self.title, self.description, self.due_date, self.completed)
    }
}
