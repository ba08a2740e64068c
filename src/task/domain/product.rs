//! Validated product name for missions and long-term operations.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the product a mission tests.
///
/// Interior spacing is preserved for display; only the surrounding
/// whitespace is trimmed. Mission codes compact the name separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Creates a validated product name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyProductName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyProductName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name with all whitespace removed, as used inside mission
    /// codes.
    #[must_use]
    pub fn compact(&self) -> String {
        self.0.split_whitespace().collect()
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
