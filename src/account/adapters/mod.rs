//! Adapter implementations for account pool ports.

pub mod memory;
pub mod postgres;
