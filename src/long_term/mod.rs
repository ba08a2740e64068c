//! Long-term product operations for Missionflow.
//!
//! Products promoted out of a successful mission graduate into an
//! operations roster. Each roster entry carries a one-off setup checklist
//! and two recurring duties: a daily comment check and a weekly cover
//! refresh. The cadence tracker answers "is this duty done for the current
//! window?" from timestamps alone, so nothing needs resetting at midnight
//! or on week boundaries. The module follows hexagonal architecture:
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
