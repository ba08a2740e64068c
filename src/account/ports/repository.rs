//! Repository port for account pool persistence and lookup.

use crate::account::domain::{Account, AccountId, AccountStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateAccount`] when the account
    /// label already exists.
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Persists changes to an existing account (status, view count,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when the account does not
    /// exist.
    async fn update(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Finds an account by its label.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: &AccountId) -> AccountRepositoryResult<Option<Account>>;

    /// Returns every account in the pool, newest first.
    async fn list(&self) -> AccountRepositoryResult<Vec<Account>>;

    /// Returns accounts in the given pool status, newest first.
    async fn list_by_status(
        &self,
        status: AccountStatus,
    ) -> AccountRepositoryResult<Vec<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// An account with the same label already exists.
    #[error("duplicate account label: {0}")]
    DuplicateAccount(AccountId),

    /// The account was not found.
    #[error("account not found: {0}")]
    NotFound(AccountId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
