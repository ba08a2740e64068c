//! Error types for identity domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The actor email is empty after trimming.
    #[error("actor email must not be empty")]
    EmptyEmail,

    /// The actor email contains whitespace.
    #[error("actor email '{0}' must not contain whitespace")]
    EmailContainsWhitespace(String),
}

/// Error returned while parsing actor roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown actor role: {0}")]
pub struct ParseRoleError(pub String);
