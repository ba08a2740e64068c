//! Identifier types for the account domain.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator-assigned label identifying an account in the pool.
///
/// Labels are short handles such as `7` or `m03` chosen by the operators who
/// run the devices. They appear verbatim inside derived mission codes, so the
/// value must be non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a validated account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyAccountId`] when the value is empty
    /// after trimming, or
    /// [`AccountDomainError::AccountIdContainsWhitespace`] when interior
    /// whitespace remains.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(AccountDomainError::EmptyAccountId);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(AccountDomainError::AccountIdContainsWhitespace(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
