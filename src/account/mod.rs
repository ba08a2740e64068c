//! Social account pool management for Missionflow.
//!
//! Accounts enter the pool in a warming state while operators build up
//! believable activity on the device. Warming accounts record their latest
//! observed view count until an operator either qualifies them for mission
//! work or abandons them. Missions only ever target qualified accounts,
//! although previously created missions keep running if their account is
//! later abandoned. The module follows hexagonal architecture:
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
