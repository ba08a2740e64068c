//! Repository port for mission persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mission repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Mission persistence contract.
///
/// Mission codes are deliberately not a key: two missions may share a code
/// when the same product is retested on the same account on the same day.
/// Only the mission identifier is unique.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new mission.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the mission ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing mission (checklists, status, outcome,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the mission does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a mission by its identifier.
    ///
    /// Returns `None` when the mission does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every mission, newest first.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by mission repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A mission with the same identifier already exists.
    #[error("duplicate mission identifier: {0}")]
    DuplicateTask(TaskId),

    /// The mission was not found.
    #[error("mission not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
