//! Application services for task orchestration.

mod tracker;

pub use tracker::{
    CreateTaskRequest, TaskTrackerError, TaskTrackerResult, TaskTrackerService, UpdateTaskRequest,
};
