//! Domain model for task records.
//!
//! The task domain models form-input validation, record construction, and
//! in-place mutation while keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod fields;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use fields::{DueDate, RawTaskFields, TaskFields, TaskTitle};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
