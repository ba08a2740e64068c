//! Port contracts for long-term product operations.
//!
//! Ports define infrastructure-agnostic interfaces used by operations
//! services.

pub mod repository;

pub use repository::{
    LongTermProductRepository, LongTermProductRepositoryError, LongTermProductRepositoryResult,
};
