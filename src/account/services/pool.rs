//! Service layer for enrolling and managing pool accounts.

use crate::account::{
    domain::{Account, AccountDomainError, AccountId, AccountProfile, AccountStatus},
    ports::{AccountRepository, AccountRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for enrolling an account into the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollAccountRequest {
    account_id: String,
    display_name: String,
    phone_id: String,
    sim_slot: String,
    note: Option<String>,
}

impl EnrollAccountRequest {
    /// Creates a request with the required label and display name.
    #[must_use]
    pub fn new(account_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            display_name: display_name.into(),
            phone_id: String::new(),
            sim_slot: AccountProfile::DEFAULT_SIM_SLOT.to_owned(),
            note: None,
        }
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
}

/// Service-level errors for account pool operations.
#[derive(Debug, Error)]
pub enum AccountPoolError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AccountRepositoryError),
}

/// Result type for account pool service operations.
pub type AccountPoolResult<T> = Result<T, AccountPoolError>;

/// Account pool orchestration service.
#[derive(Clone)]
pub struct AccountPoolService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AccountPoolService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new account pool service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Enrols a new warming account into the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AccountPoolError`] when validation fails or the repository
    /// rejects persistence.
    pub async fn enroll(&self, request: EnrollAccountRequest) -> AccountPoolResult<Account> {
        let id = AccountId::new(request.account_id)?;
        let mut profile = AccountProfile::new(request.display_name)?;
        profile = profile
            .with_phone_id(request.phone_id)
            .with_sim_slot(request.sim_slot);
        if let Some(note) = request.note {
            profile = profile.with_note(note);
        }

        let account = Account::enroll(id, profile, &*self.clock);
        self.repository.store(&account).await?;
        Ok(account)
    }

    /// Records the latest observed warming view count.
    ///
    /// The aggregate is mutated optimistically and restored to its exact
    /// prior state when persistence fails.
    ///
    /// # Errors
    ///
    /// Returns [`AccountPoolError`] when the account is not warming or the
    /// repository rejects the update.
    pub async fn record_warming_views(
        &self,
        account: &mut Account,
        views: u64,
    ) -> AccountPoolResult<()> {
        let snapshot = account.clone();
        account.record_warming_views(views, &*self.clock)?;
        self.persist_or_rollback(account, snapshot).await
    }

    /// Qualifies a warming account for mission work.
    ///
    /// # Errors
    ///
    /// Returns [`AccountPoolError`] when the transition is invalid or the
    /// repository rejects the update.
    pub async fn mark_qualified(&self, account: &mut Account) -> AccountPoolResult<()> {
        let snapshot = account.clone();
        account.mark_qualified(&*self.clock)?;
        self.persist_or_rollback(account, snapshot).await
    }

    /// Writes a warming account off.
    ///
    /// # Errors
    ///
    /// Returns [`AccountPoolError`] when the transition is invalid or the
    /// repository rejects the update.
    pub async fn mark_abandoned(&self, account: &mut Account) -> AccountPoolResult<()> {
        let snapshot = account.clone();
        account.mark_abandoned(&*self.clock)?;
        self.persist_or_rollback(account, snapshot).await
    }

    /// Returns every pool account, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AccountPoolError::Repository`] when the listing fails.
    pub async fn roster(&self) -> AccountPoolResult<Vec<Account>> {
        Ok(self.repository.list().await?)
    }

    /// Returns qualified accounts available for new missions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AccountPoolError::Repository`] when the listing fails.
    pub async fn active_accounts(&self) -> AccountPoolResult<Vec<Account>> {
        Ok(self.repository.list_by_status(AccountStatus::Active).await?)
    }

    /// Retrieves an account by its label.
    ///
    /// Returns `Ok(None)` when no account carries the label.
    ///
    /// # Errors
    ///
    /// Returns [`AccountPoolError::Repository`] when the lookup fails.
    pub async fn find(&self, id: &AccountId) -> AccountPoolResult<Option<Account>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn persist_or_rollback(
        &self,
        account: &mut Account,
        snapshot: Account,
    ) -> AccountPoolResult<()> {
        if let Err(err) = self.repository.update(account).await {
            *account = snapshot;
            return Err(err.into());
        }
        Ok(())
    }
}
