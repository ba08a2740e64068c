//! Thread-safe in-memory account repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Account, AccountId, AccountStatus},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};

/// Thread-safe in-memory account repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Default)]
struct InMemoryAccountState {
    accounts: HashMap<AccountId, Account>,
    insertion_order: Vec<AccountId>,
}

impl InMemoryAccountState {
    /// Returns accounts newest first, mirroring the creation-time ordering
    /// the store-backed adapter produces.
    fn newest_first(&self) -> Vec<Account> {
        self.insertion_order
            .iter()
            .rev()
            .filter_map(|id| self.accounts.get(id).cloned())
            .collect()
    }
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.accounts.contains_key(account.id()) {
            return Err(AccountRepositoryError::DuplicateAccount(
                account.id().clone(),
            ));
        }

        state.insertion_order.push(account.id().clone());
        state.accounts.insert(account.id().clone(), account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.accounts.contains_key(account.id()) {
            return Err(AccountRepositoryError::NotFound(account.id().clone()));
        }

        state.accounts.insert(account.id().clone(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.accounts.get(id).cloned())
    }

    async fn list(&self) -> AccountRepositoryResult<Vec<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.newest_first())
    }

    async fn list_by_status(
        &self,
        status: AccountStatus,
    ) -> AccountRepositoryResult<Vec<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut accounts = state.newest_first();
        accounts.retain(|account| account.status() == status);
        Ok(accounts)
    }
}
