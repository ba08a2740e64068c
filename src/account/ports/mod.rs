//! Port contracts for account pool management.
//!
//! Ports define infrastructure-agnostic interfaces used by account services.

pub mod repository;

pub use repository::{AccountRepository, AccountRepositoryError, AccountRepositoryResult};
