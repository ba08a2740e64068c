//! Tests for the mission lifecycle context.
