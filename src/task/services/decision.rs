//! Decision router spawning follow-up records after a review decision.
//!
//! Recording an outcome is the mission's own affair; this router owns what
//! happens next. Retry spawns a fresh retest mission, promotion inserts the
//! product into long-term operations, and drop does nothing. Each follow-up
//! runs only after the operator confirms it, so the router exposes them as
//! separate operations rather than one opaque step.

use crate::long_term::{
    domain::{LongTermDomainError, LongTermProduct},
    ports::{LongTermProductRepository, LongTermProductRepositoryError},
};
use crate::task::{
    domain::{Task, TaskDomainError},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for decision follow-up operations.
#[derive(Debug, Error)]
pub enum DecisionRouterError {
    /// Mission domain validation failed.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
    /// Long-term domain validation failed.
    #[error(transparent)]
    LongTerm(#[from] LongTermDomainError),
    /// Mission repository operation failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
    /// Long-term product repository operation failed.
    #[error(transparent)]
    ProductRepository(#[from] LongTermProductRepositoryError),
}

/// Result type for decision router operations.
pub type DecisionRouterResult<T> = Result<T, DecisionRouterError>;

/// Router for operator-confirmed follow-ups after review decisions.
#[derive(Clone)]
pub struct DecisionRouter<T, L, C>
where
    T: TaskRepository,
    L: LongTermProductRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    products: Arc<L>,
    clock: Arc<C>,
}

impl<T, L, C> DecisionRouter<T, L, C>
where
    T: TaskRepository,
    L: LongTermProductRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new decision router.
    #[must_use]
    pub const fn new(tasks: Arc<T>, products: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            products,
            clock,
        }
    }

    /// Spawns and stores an independent retest mission for a retry outcome.
    ///
    /// The retest targets the same account, product, and creator, starts
    /// from planning, and derives its own mission code. The original
    /// mission is not mutated beyond the outcome it already carries.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionRouterError`] when the original's outcome is not
    /// retry or the repository rejects the new mission.
    pub async fn spawn_retest(&self, original: &Task) -> DecisionRouterResult<Task> {
        let retest = original.spawn_retest(&*self.clock)?;
        self.tasks.store(&retest).await?;
        Ok(retest)
    }

    /// Promotes a mission's product into long-term operations.
    ///
    /// Attribution follows the mission: the promoted product records the
    /// mission's creator, not whichever actor confirmed the promotion.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionRouterError`] when the mission's outcome is not
    /// promoted or the repository rejects the product.
    pub async fn promote(&self, task: &Task) -> DecisionRouterResult<LongTermProduct> {
        let product = LongTermProduct::promote_from(task, &*self.clock)?;
        self.products.store(&product).await?;
        Ok(product)
    }

    /// Spawns and stores a fresh posting mission for a long-term product.
    ///
    /// Long-term products keep publishing over time; each new post runs
    /// through the full mission lifecycle again, attributed to the
    /// product's creator.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionRouterError`] when the repository rejects the new
    /// mission.
    pub async fn spawn_follow_up_post(
        &self,
        product: &LongTermProduct,
    ) -> DecisionRouterResult<Task> {
        let task = Task::new(
            product.account_id().clone(),
            product.product_name().clone(),
            product.creator().clone(),
            &*self.clock,
        );
        self.tasks.store(&task).await?;
        Ok(task)
    }
}
