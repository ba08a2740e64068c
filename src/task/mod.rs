//! Product-testing mission lifecycle for Missionflow.
//!
//! A mission pairs one pool account with one product to test. It starts in
//! planning, advances to ready the moment its publication checklists are
//! complete, records a publication timestamp when the post goes live, and
//! finishes with a single review decision: drop the product, retest it on a
//! fresh mission, or promote it into long-term operations. Status only ever
//! moves forward. The module follows hexagonal architecture:
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
