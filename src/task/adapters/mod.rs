//! Adapter implementations for mission lifecycle ports.

pub mod memory;
pub mod postgres;
