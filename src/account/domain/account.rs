//! Account aggregate root and pool status lifecycle.

use super::{AccountDomainError, AccountId, ParseAccountStatusError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pool status of a social account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Account is building believable activity before mission work.
    Warming,
    /// Account has qualified for mission work.
    Active,
    /// Account was written off during warming.
    Abandoned,
}

impl AccountStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warming => "warming",
            Self::Active => "active",
            Self::Abandoned => "abandoned",
        }
    }

    /// Returns whether warming view counts may be recorded in this status.
    #[must_use]
    pub const fn can_record_warming_views(self) -> bool {
        matches!(self, Self::Warming)
    }

    /// Returns whether transition to `target` is allowed.
    ///
    /// Qualification and abandonment are both one-way exits from warming;
    /// neither outcome can be revisited.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!((self, target), (Self::Warming, Self::Active | Self::Abandoned))
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AccountStatus {
    type Error = ParseAccountStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "warming" => Ok(Self::Warming),
            "active" => Ok(Self::Active),
            "abandoned" => Ok(Self::Abandoned),
            _ => Err(ParseAccountStatusError(value.to_owned())),
        }
    }
}

/// Descriptive details of the device and persona behind an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    display_name: String,
    phone_id: String,
    sim_slot: String,
    note: Option<String>,
}

impl AccountProfile {
    /// Default SIM slot label assigned when none is provided.
    pub const DEFAULT_SIM_SLOT: &'static str = "slot 1";

    /// Creates a profile with the required display name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyDisplayName`] when the name is
    /// empty after trimming.
    pub fn new(display_name: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = display_name.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(AccountDomainError::EmptyDisplayName);
        }
        Ok(Self {
            display_name: normalized.to_owned(),
            phone_id: String::new(),
            sim_slot: Self::DEFAULT_SIM_SLOT.to_owned(),
            note: None,
        })
    }

    /// Sets the device identifier.
    #[must_use]
    pub fn with_phone_id(mut self, phone_id: impl Into<String>) -> Self {
        self.phone_id = phone_id.into();
        self
    }

    /// Sets the SIM slot label.
    #[must_use]
    pub fn with_sim_slot(mut self, sim_slot: impl Into<String>) -> Self {
        self.sim_slot = sim_slot.into();
        self
    }

    /// Sets the free-form operator note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Returns the human-readable account name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the device identifier, possibly empty.
    #[must_use]
    pub fn phone_id(&self) -> &str {
        &self.phone_id
    }

    /// Returns the SIM slot label.
    #[must_use]
    pub fn sim_slot(&self) -> &str {
        &self.sim_slot
    }

    /// Returns the operator note, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Social account aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    profile: AccountProfile,
    status: AccountStatus,
    warming_view_count: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted account aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAccountData {
    /// Persisted account identifier.
    pub id: AccountId,
    /// Persisted profile details.
    pub profile: AccountProfile,
    /// Persisted pool status.
    pub status: AccountStatus,
    /// Persisted latest warming view count.
    pub warming_view_count: u64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Enrols a new account into the pool in the warming status.
    #[must_use]
    pub fn enroll(id: AccountId, profile: AccountProfile, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            profile,
            status: AccountStatus::Warming,
            warming_view_count: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            profile: data.profile,
            status: data.status,
            warming_view_count: data.warming_view_count,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> &AccountId {
        &self.id
    }

    /// Returns the profile details.
    #[must_use]
    pub const fn profile(&self) -> &AccountProfile {
        &self.profile
    }

    /// Returns the pool status.
    #[must_use]
    pub const fn status(&self) -> AccountStatus {
        self.status
    }

    /// Returns the latest observed warming view count.
    #[must_use]
    pub const fn warming_view_count(&self) -> u64 {
        self.warming_view_count
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Records the latest observed view count while warming.
    ///
    /// The count is a replacement, not an increment: operators enter the
    /// total currently shown on the device.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::ViewCountRequiresWarming`] when the
    /// account has already left the warming status.
    pub fn record_warming_views(
        &mut self,
        views: u64,
        clock: &impl Clock,
    ) -> Result<(), AccountDomainError> {
        if !self.status.can_record_warming_views() {
            return Err(AccountDomainError::ViewCountRequiresWarming {
                account_id: self.id.clone(),
                status: self.status.as_str().to_owned(),
            });
        }
        self.warming_view_count = views;
        self.touch(clock);
        Ok(())
    }

    /// Qualifies the account for mission work.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidStatusTransition`] when the
    /// account is not warming.
    pub fn mark_qualified(&mut self, clock: &impl Clock) -> Result<(), AccountDomainError> {
        self.transition_to(AccountStatus::Active)?;
        self.touch(clock);
        Ok(())
    }

    /// Writes the account off without qualifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidStatusTransition`] when the
    /// account is not warming.
    pub fn mark_abandoned(&mut self, clock: &impl Clock) -> Result<(), AccountDomainError> {
        self.transition_to(AccountStatus::Abandoned)?;
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }

    fn transition_to(&mut self, target: AccountStatus) -> Result<(), AccountDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(AccountDomainError::InvalidStatusTransition {
                account_id: self.id.clone(),
                from: self.status.as_str().to_owned(),
                to: target.as_str().to_owned(),
            });
        }
        self.status = target;
        Ok(())
    }
}

/// Compact account details attached to mission board entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Human-readable account name.
    pub display_name: String,
    /// Device identifier running the account.
    pub phone_id: String,
    /// SIM slot label on the device.
    pub sim_slot: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            display_name: account.profile().display_name().to_owned(),
            phone_id: account.profile().phone_id().to_owned(),
            sim_slot: account.profile().sim_slot().to_owned(),
        }
    }
}
