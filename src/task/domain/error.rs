//! Error types for mission domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating mission domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The product name is empty after trimming.
    #[error("product name must not be empty")]
    EmptyProductName,

    /// The requested status advancement is not allowed.
    #[error("mission {task_id} cannot advance from {from} to {to}")]
    InvalidStatusTransition {
        /// Mission whose advancement was rejected.
        task_id: TaskId,
        /// Status the mission is currently in.
        from: String,
        /// Status the advancement targeted.
        to: String,
    },

    /// Review decisions may only be recorded on published missions.
    #[error("mission {task_id} is {status}, decisions require published")]
    DecisionRequiresPublished {
        /// Mission whose decision was rejected.
        task_id: TaskId,
        /// Status the mission is currently in.
        status: String,
    },

    /// The mission already carries a review decision.
    #[error("mission {task_id} already decided as {outcome}")]
    AlreadyDecided {
        /// Mission whose second decision was rejected.
        task_id: TaskId,
        /// Outcome already recorded.
        outcome: String,
    },

    /// Retest missions may only be spawned from a recorded retry outcome.
    #[error("mission {task_id} has outcome {outcome}, retests require retry")]
    RetestRequiresRetryOutcome {
        /// Mission whose retest was rejected.
        task_id: TaskId,
        /// Outcome currently recorded, or `none`.
        outcome: String,
    },
}

/// Error returned while parsing mission statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown mission status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing review outcomes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown review outcome: {0}")]
pub struct ParseReviewOutcomeError(pub String);
