//! Task tracking for Taskboard.
//!
//! This module implements the task record lifecycle: validating form input
//! into well-formed records, persisting them, and signalling list consumers
//! to refetch after every mutation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
