//! Mission status machine and review outcomes.

use super::{ParseReviewOutcomeError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Mission is being prepared against its checklists.
    Planning,
    /// Both checklists are complete; the post may go live.
    Ready,
    /// The post is live and awaiting its review decision.
    Published,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Ready => "ready",
            Self::Published => "published",
        }
    }

    /// Returns whether advancement to `target` is allowed.
    ///
    /// Status only ever moves forward one step; no transition may regress
    /// or skip.
    #[must_use]
    pub const fn can_advance_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Planning, Self::Ready) | (Self::Ready, Self::Published)
        )
    }

    /// Returns whether this status ends the forward progression.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "planning" => Ok(Self::Planning),
            "ready" => Ok(Self::Ready),
            "published" => Ok(Self::Published),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Review decision recorded once a mission has been published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    /// The product tested poorly; nothing further happens.
    Drop,
    /// The product deserves another mission on the same account.
    Retry,
    /// The product performed well and joins long-term operations.
    Promoted,
}

impl ReviewOutcome {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Retry => "retry",
            Self::Promoted => "promoted",
        }
    }

    /// Returns the follow-up action this outcome routes to, if any.
    ///
    /// Dropping a product has no follow-up. Retry and promotion both spawn
    /// new records and are confirmed by the operator before taking effect.
    #[must_use]
    pub const fn follow_up(self) -> Option<FollowUp> {
        match self {
            Self::Drop => None,
            Self::Retry => Some(FollowUp::ConfirmRetest),
            Self::Promoted => Some(FollowUp::ConfirmPromotion),
        }
    }
}

impl fmt::Display for ReviewOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReviewOutcome {
    type Error = ParseReviewOutcomeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "drop" => Ok(Self::Drop),
            "retry" => Ok(Self::Retry),
            "promoted" => Ok(Self::Promoted),
            _ => Err(ParseReviewOutcomeError(value.to_owned())),
        }
    }
}

/// Operator-confirmed follow-up action after a review decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    /// Confirm spawning a fresh retest mission.
    ConfirmRetest,
    /// Confirm promoting the product into long-term operations.
    ConfirmPromotion,
}
