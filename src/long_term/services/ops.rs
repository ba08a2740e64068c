//! Service layer for long-term product setup and cadence tracking.

use crate::account::{
    domain::{AccountId, AccountSummary},
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::identity::domain::{Actor, visible_to};
use crate::long_term::{
    domain::{CadenceStatus, LongTermProduct, LongTermProductId, SetupItem},
    ports::{LongTermProductRepository, LongTermProductRepositoryError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for long-term operations.
#[derive(Debug, Error)]
pub enum LongTermOpsError {
    /// Product repository operation failed.
    #[error(transparent)]
    Repository(#[from] LongTermProductRepositoryError),
    /// Account repository operation failed.
    #[error(transparent)]
    AccountRepository(#[from] AccountRepositoryError),
}

/// Result type for long-term operations service calls.
pub type LongTermOpsResult<T> = Result<T, LongTermOpsError>;

/// One roster entry together with its resolved account details and the
/// cadence snapshot taken when the dashboard was built.
///
/// The account is `None` when the product references a label no longer in
/// the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    /// The roster entry itself.
    pub product: LongTermProduct,
    /// Compact details of the home account, when still enrolled.
    pub account: Option<AccountSummary>,
    /// Both recurring duties evaluated at dashboard build time.
    pub cadence: CadenceStatus,
}

/// Long-term products visible to one actor, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsDashboard {
    /// Roster entries with their cadence snapshots.
    pub products: Vec<ProductCard>,
}

/// Long-term operations orchestration service.
#[derive(Clone)]
pub struct LongTermOpsService<R, A, C>
where
    R: LongTermProductRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    products: Arc<R>,
    accounts: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> LongTermOpsService<R, A, C>
where
    R: LongTermProductRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new long-term operations service.
    ///
    /// The account repository only feeds the dashboard read model; product
    /// mutations never touch it.
    #[must_use]
    pub const fn new(products: Arc<R>, accounts: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            products,
            accounts,
            clock,
        }
    }

    /// Flips one setup step and returns its new value.
    ///
    /// The aggregate is mutated optimistically and restored to its exact
    /// pre-flip state when persistence fails.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermOpsError::Repository`] when the update fails.
    pub async fn toggle_setup(
        &self,
        product: &mut LongTermProduct,
        item: SetupItem,
    ) -> LongTermOpsResult<bool> {
        let snapshot = product.clone();
        let value = product.toggle_setup(item, &*self.clock);
        self.persist_or_rollback(product, snapshot).await?;
        Ok(value)
    }

    /// Records the daily comment check as done now.
    ///
    /// Marking again within the same day keeps the duty satisfied and
    /// advances the stored timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermOpsError::Repository`] when the update fails.
    pub async fn mark_daily_check(&self, product: &mut LongTermProduct) -> LongTermOpsResult<()> {
        let snapshot = product.clone();
        product.mark_daily_check(&*self.clock);
        self.persist_or_rollback(product, snapshot).await
    }

    /// Records the weekly cover refresh as done now.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermOpsError::Repository`] when the update fails.
    pub async fn mark_weekly_cover(&self, product: &mut LongTermProduct) -> LongTermOpsResult<()> {
        let snapshot = product.clone();
        product.mark_weekly_cover(&*self.clock);
        self.persist_or_rollback(product, snapshot).await
    }

    /// Retrieves a product by its identifier.
    ///
    /// Returns `Ok(None)` when the product does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermOpsError::Repository`] when the lookup fails.
    pub async fn find(&self, id: LongTermProductId) -> LongTermOpsResult<Option<LongTermProduct>> {
        Ok(self.products.find_by_id(id).await?)
    }

    /// Returns the long-term products the actor may view, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermOpsError::Repository`] when the listing fails.
    pub async fn visible_products(&self, actor: &Actor) -> LongTermOpsResult<Vec<LongTermProduct>> {
        let products = self.products.list().await?;
        Ok(visible_to(actor, products))
    }

    /// Builds the operations dashboard for the actor.
    ///
    /// Each visible product is paired with its home account details and a
    /// cadence snapshot evaluated at the current instant.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermOpsError`] when either listing fails.
    pub async fn dashboard(&self, actor: &Actor) -> LongTermOpsResult<OpsDashboard> {
        let products = self.visible_products(actor).await?;
        let accounts = self.accounts.list().await?;
        let summaries: HashMap<AccountId, AccountSummary> = accounts
            .iter()
            .map(|account| (account.id().clone(), AccountSummary::from(account)))
            .collect();

        let now = self.clock.utc();
        let cards = products
            .into_iter()
            .map(|product| {
                let account = summaries.get(product.account_id()).cloned();
                let cadence = product.cadence_status(now);
                ProductCard {
                    product,
                    account,
                    cadence,
                }
            })
            .collect();
        Ok(OpsDashboard { products: cards })
    }

    async fn persist_or_rollback(
        &self,
        product: &mut LongTermProduct,
        snapshot: LongTermProduct,
    ) -> LongTermOpsResult<()> {
        if let Err(err) = self.products.update(product).await {
            *product = snapshot;
            return Err(err.into());
        }
        Ok(())
    }
}
