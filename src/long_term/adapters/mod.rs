//! Adapter implementations for long-term operations ports.

pub mod memory;
pub mod postgres;
