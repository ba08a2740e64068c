//! Tests for the long-term operations context.
