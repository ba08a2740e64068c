//! In-memory end-to-end tests for the mission lifecycle.
//!
//! Tests are organized into modules by scenario:
//! - `mission_flow_tests`: enrollment through publication and review
//! - `decision_routing_tests`: retest, promotion, and follow-up posts
//! - `visibility_tests`: creator scoping across contexts

mod in_memory {
    pub mod helpers;

    mod decision_routing_tests;
    mod mission_flow_tests;
    mod visibility_tests;
}
