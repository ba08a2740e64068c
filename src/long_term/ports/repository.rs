//! Repository port for long-term product persistence and lookup.

use crate::long_term::domain::{LongTermProduct, LongTermProductId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for long-term product repository operations.
pub type LongTermProductRepositoryResult<T> = Result<T, LongTermProductRepositoryError>;

/// Long-term product persistence contract.
#[async_trait]
pub trait LongTermProductRepository: Send + Sync {
    /// Stores a new long-term product.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermProductRepositoryError::DuplicateProduct`] when the
    /// product ID already exists.
    async fn store(&self, product: &LongTermProduct) -> LongTermProductRepositoryResult<()>;

    /// Persists changes to an existing product (setup flags, cadence
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`LongTermProductRepositoryError::NotFound`] when the product
    /// does not exist.
    async fn update(&self, product: &LongTermProduct) -> LongTermProductRepositoryResult<()>;

    /// Finds a product by its identifier.
    ///
    /// Returns `None` when the product does not exist.
    async fn find_by_id(
        &self,
        id: LongTermProductId,
    ) -> LongTermProductRepositoryResult<Option<LongTermProduct>>;

    /// Returns every long-term product, newest first.
    async fn list(&self) -> LongTermProductRepositoryResult<Vec<LongTermProduct>>;
}

/// Errors returned by long-term product repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LongTermProductRepositoryError {
    /// A product with the same identifier already exists.
    #[error("duplicate long-term product identifier: {0}")]
    DuplicateProduct(LongTermProductId),

    /// The product was not found.
    #[error("long-term product not found: {0}")]
    NotFound(LongTermProductId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LongTermProductRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
