//! Error types for account domain validation and parsing.

use super::AccountId;
use thiserror::Error;

/// Errors returned while constructing or mutating account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The account identifier is empty after trimming.
    #[error("account identifier must not be empty")]
    EmptyAccountId,

    /// The account identifier contains whitespace.
    #[error("account identifier '{0}' must not contain whitespace")]
    AccountIdContainsWhitespace(String),

    /// The account display name is empty after trimming.
    #[error("account display name must not be empty")]
    EmptyDisplayName,

    /// The requested status transition is not allowed.
    #[error("account {account_id} cannot transition from {from} to {to}")]
    InvalidStatusTransition {
        /// Account whose transition was rejected.
        account_id: AccountId,
        /// Status the account is currently in.
        from: String,
        /// Status the transition targeted.
        to: String,
    },

    /// Warming view counts may only be recorded while the account is warming.
    #[error("account {account_id} is {status}, view counts require warming")]
    ViewCountRequiresWarming {
        /// Account whose view count update was rejected.
        account_id: AccountId,
        /// Status the account is currently in.
        status: String,
    },
}

/// Error returned while parsing account statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown account status: {0}")]
pub struct ParseAccountStatusError(pub String);
