//! Error types for long-term operations domain validation.

use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors returned while constructing long-term domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LongTermDomainError {
    /// Long-term products are created only from a promoted review outcome.
    #[error("mission {task_id} has outcome {outcome}, promotion requires promoted")]
    PromotionRequiresPromotedOutcome {
        /// Mission whose promotion was rejected.
        task_id: TaskId,
        /// Outcome currently recorded, or `none`.
        outcome: String,
    },
}
