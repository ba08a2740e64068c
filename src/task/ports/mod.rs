//! Port contracts for mission lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by mission services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
