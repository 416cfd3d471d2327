//! Taskboard: minimal task-tracking service core.
//!
//! This crate provides the service layer of a small task tracker: validated
//! task records, five CRUD-style operations, and a payload-free change
//! signal that tells list views when to refetch.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, channels)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, persistence, and change signals

pub mod task;
