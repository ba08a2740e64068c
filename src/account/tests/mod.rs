//! Tests for the account pool context.

mod domain_tests;
mod service_tests;
