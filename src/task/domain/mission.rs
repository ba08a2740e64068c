//! Mission code derivation.

use super::ProductName;
use crate::account::domain::AccountId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-greppable mission code of the form `A{account}-{product}-{date}`.
///
/// The code is derived once at mission creation from the account label, the
/// whitespace-compacted product name, and the UTC creation date formatted as
/// `YYYYMMDD`. Codes are labels, not keys: retesting the same product on the
/// same account on the same day yields the same string, and that collision
/// is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionCode(String);

impl MissionCode {
    /// Derives a mission code from its constituent parts.
    #[must_use]
    pub fn derive(account_id: &AccountId, product_name: &ProductName, date: NaiveDate) -> Self {
        Self(format!(
            "A{}-{}-{}",
            account_id,
            product_name.compact(),
            date.format("%Y%m%d")
        ))
    }

    /// Reconstructs a mission code from its stored representation.
    ///
    /// Stored codes are trusted verbatim; re-deriving them could silently
    /// change historical records whose account label or product name was
    /// edited since creation.
    #[must_use]
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MissionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MissionCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
