//! Thread-safe in-memory long-term product repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::long_term::{
    domain::{LongTermProduct, LongTermProductId},
    ports::{
        LongTermProductRepository, LongTermProductRepositoryError,
        LongTermProductRepositoryResult,
    },
};

/// Thread-safe in-memory long-term product repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLongTermProductRepository {
    state: Arc<RwLock<InMemoryProductState>>,
}

#[derive(Debug, Default)]
struct InMemoryProductState {
    products: HashMap<LongTermProductId, LongTermProduct>,
    insertion_order: Vec<LongTermProductId>,
}

impl InMemoryLongTermProductRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LongTermProductRepository for InMemoryLongTermProductRepository {
    async fn store(&self, product: &LongTermProduct) -> LongTermProductRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LongTermProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.products.contains_key(&product.id()) {
            return Err(LongTermProductRepositoryError::DuplicateProduct(
                product.id(),
            ));
        }

        state.insertion_order.push(product.id());
        state.products.insert(product.id(), product.clone());
        Ok(())
    }

    async fn update(&self, product: &LongTermProduct) -> LongTermProductRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LongTermProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.products.contains_key(&product.id()) {
            return Err(LongTermProductRepositoryError::NotFound(product.id()));
        }

        state.products.insert(product.id(), product.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: LongTermProductId,
    ) -> LongTermProductRepositoryResult<Option<LongTermProduct>> {
        let state = self.state.read().map_err(|err| {
            LongTermProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.products.get(&id).cloned())
    }

    async fn list(&self) -> LongTermProductRepositoryResult<Vec<LongTermProduct>> {
        let state = self.state.read().map_err(|err| {
            LongTermProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Newest first, mirroring the creation-time ordering the
        // store-backed adapter produces.
        Ok(state
            .insertion_order
            .iter()
            .rev()
            .filter_map(|id| state.products.get(id).cloned())
            .collect())
    }
}
