//! Long-term product aggregate root.

use super::{CadenceStatus, CadenceWindow, LongTermDomainError, LongTermProductId};
use crate::account::domain::AccountId;
use crate::identity::domain::{ActorEmail, CreatorScoped};
use crate::task::domain::{ProductName, ReviewOutcome, Task};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One-off setup checklist completed when a product joins the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupChecklist {
    /// Reusable comment library assembled for the product.
    #[serde(rename = "setup_library")]
    pub comment_library: bool,
    /// Initial batch of seeded reviews placed.
    #[serde(rename = "setup_20_reviews")]
    pub seeded_reviews: bool,
}

impl SetupChecklist {
    /// Returns whether both setup steps are done.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.comment_library && self.seeded_reviews
    }
}

/// A single toggleable setup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupItem {
    /// Reusable comment library assembled for the product.
    CommentLibrary,
    /// Initial batch of seeded reviews placed.
    SeededReviews,
}

impl SetupItem {
    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommentLibrary => "comment_library",
            Self::SeededReviews => "seeded_reviews",
        }
    }
}

/// Long-term product aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTermProduct {
    id: LongTermProductId,
    account_id: AccountId,
    product_name: ProductName,
    creator: ActorEmail,
    setup: SetupChecklist,
    last_daily_check: Option<DateTime<Utc>>,
    last_weekly_cover: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted long-term product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLongTermProductData {
    /// Persisted product identifier.
    pub id: LongTermProductId,
    /// Persisted home account label.
    pub account_id: AccountId,
    /// Persisted product name.
    pub product_name: ProductName,
    /// Persisted creator email.
    pub creator: ActorEmail,
    /// Persisted setup checklist.
    pub setup: SetupChecklist,
    /// Persisted latest daily check timestamp, if any.
    pub last_daily_check: Option<DateTime<Utc>>,
    /// Persisted latest weekly cover timestamp, if any.
    pub last_weekly_cover: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl LongTermProduct {
    /// Promotes a reviewed mission's product into long-term operations.
    ///
    /// The roster entry inherits the mission's account, product, and
    /// creator. Attribution deliberately follows the mission creator, not
    /// the actor confirming the promotion. Setup starts unchecked and both
    /// cadence duties start never-completed.
    ///
    /// # Errors
    ///
    /// Returns [`LongTermDomainError::PromotionRequiresPromotedOutcome`]
    /// unless the mission's recorded outcome is promoted.
    pub fn promote_from(task: &Task, clock: &impl Clock) -> Result<Self, LongTermDomainError> {
        if task.review_outcome() != Some(ReviewOutcome::Promoted) {
            return Err(LongTermDomainError::PromotionRequiresPromotedOutcome {
                task_id: task.id(),
                outcome: task
                    .review_outcome()
                    .map_or_else(|| "none".to_owned(), |recorded| recorded.as_str().to_owned()),
            });
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: LongTermProductId::new(),
            account_id: task.account_id().clone(),
            product_name: task.product_name().clone(),
            creator: task.creator().clone(),
            setup: SetupChecklist::default(),
            last_daily_check: None,
            last_weekly_cover: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a product from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedLongTermProductData) -> Self {
        Self {
            id: data.id,
            account_id: data.account_id,
            product_name: data.product_name,
            creator: data.creator,
            setup: data.setup,
            last_daily_check: data.last_daily_check,
            last_weekly_cover: data.last_weekly_cover,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the product identifier.
    #[must_use]
    pub const fn id(&self) -> LongTermProductId {
        self.id
    }

    /// Returns the home account label.
    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the product name.
    #[must_use]
    pub const fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    /// Returns the email of the creating actor.
    #[must_use]
    pub const fn creator(&self) -> &ActorEmail {
        &self.creator
    }

    /// Returns the setup checklist.
    #[must_use]
    pub const fn setup(&self) -> SetupChecklist {
        self.setup
    }

    /// Returns when the daily comment check was last completed, if ever.
    #[must_use]
    pub const fn last_daily_check(&self) -> Option<DateTime<Utc>> {
        self.last_daily_check
    }

    /// Returns when the weekly cover refresh was last completed, if ever.
    #[must_use]
    pub const fn last_weekly_cover(&self) -> Option<DateTime<Utc>> {
        self.last_weekly_cover
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Flips one setup step and returns its new value.
    pub fn toggle_setup(&mut self, item: SetupItem, clock: &impl Clock) -> bool {
        let value = match item {
            SetupItem::CommentLibrary => {
                self.setup.comment_library = !self.setup.comment_library;
                self.setup.comment_library
            }
            SetupItem::SeededReviews => {
                self.setup.seeded_reviews = !self.setup.seeded_reviews;
                self.setup.seeded_reviews
            }
        };
        self.touch(clock);
        value
    }

    /// Records the daily comment check as done now.
    ///
    /// The previous timestamp is replaced outright; completions are never
    /// cleared, they only age out of their window.
    pub fn mark_daily_check(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.last_daily_check = Some(timestamp);
        self.updated_at = timestamp;
    }

    /// Records the weekly cover refresh as done now.
    pub fn mark_weekly_cover(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.last_weekly_cover = Some(timestamp);
        self.updated_at = timestamp;
    }

    /// Returns whether the daily check is done for the date of `now`.
    #[must_use]
    pub fn daily_check_done(&self, now: DateTime<Utc>) -> bool {
        CadenceWindow::Daily.satisfied_by(self.last_daily_check, now)
    }

    /// Returns whether the cover refresh is done for the week trailing
    /// `now`.
    #[must_use]
    pub fn weekly_cover_done(&self, now: DateTime<Utc>) -> bool {
        CadenceWindow::Weekly.satisfied_by(self.last_weekly_cover, now)
    }

    /// Evaluates both recurring duties at the instant `now`.
    #[must_use]
    pub fn cadence_status(&self, now: DateTime<Utc>) -> CadenceStatus {
        CadenceStatus {
            daily_check_done: self.daily_check_done(now),
            weekly_cover_done: self.weekly_cover_done(now),
        }
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl CreatorScoped for LongTermProduct {
    fn creator_email(&self) -> &ActorEmail {
        &self.creator
    }
}
