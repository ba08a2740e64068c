//! Missionflow: product-testing mission orchestration for a social account
//! matrix.
//!
//! This crate tracks the lifecycle of product-testing missions run against a
//! pool of operator-managed social accounts: preparing a mission through its
//! publication checklists, publishing it, reviewing the outcome, and routing
//! winning products into a long-term operations roster with daily and weekly
//! cadence tracking.
//!
//! # Architecture
//!
//! Missionflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`identity`]: Actor identity, roles, and record visibility
//! - [`account`]: Social account pool and warming lifecycle
//! - [`task`]: Mission creation, checklist gating, publication, and review
//! - [`long_term`]: Promoted products and operations cadence tracking

pub mod account;
pub mod identity;
pub mod long_term;
pub mod task;
