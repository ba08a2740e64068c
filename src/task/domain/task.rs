//! Mission aggregate root.

use super::{
    ChecklistItem, ChecklistToggle, GateDecision, MissionCode, PrepChecklist, ProductName,
    ReviewOutcome, SopChecklist, TaskDomainError, TaskId, TaskStatus,
};
use crate::account::domain::AccountId;
use crate::identity::domain::{ActorEmail, CreatorScoped};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Product-testing mission aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    account_id: AccountId,
    product_name: ProductName,
    mission_code: MissionCode,
    creator: ActorEmail,
    status: TaskStatus,
    sop: SopChecklist,
    prep: PrepChecklist,
    review_outcome: Option<ReviewOutcome>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted mission aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted mission identifier.
    pub id: TaskId,
    /// Persisted target account label.
    pub account_id: AccountId,
    /// Persisted product name.
    pub product_name: ProductName,
    /// Persisted mission code.
    pub mission_code: MissionCode,
    /// Persisted creator email.
    pub creator: ActorEmail,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted SOP checklist.
    pub sop: SopChecklist,
    /// Persisted preparation checklist.
    pub prep: PrepChecklist,
    /// Persisted review outcome, if any.
    pub review_outcome: Option<ReviewOutcome>,
    /// Persisted publication timestamp, if any.
    pub published_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new planning mission with empty checklists.
    ///
    /// The mission code is derived once here from the account label, the
    /// compacted product name, and the UTC creation date, and never changes
    /// afterwards.
    #[must_use]
    pub fn new(
        account_id: AccountId,
        product_name: ProductName,
        creator: ActorEmail,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let mission_code =
            MissionCode::derive(&account_id, &product_name, timestamp.date_naive());

        Self {
            id: TaskId::new(),
            account_id,
            product_name,
            mission_code,
            creator,
            status: TaskStatus::Planning,
            sop: SopChecklist::default(),
            prep: PrepChecklist::default(),
            review_outcome: None,
            published_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a mission from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            account_id: data.account_id,
            product_name: data.product_name,
            mission_code: data.mission_code,
            creator: data.creator,
            status: data.status,
            sop: data.sop,
            prep: data.prep,
            review_outcome: data.review_outcome,
            published_at: data.published_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the mission identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the target account label.
    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the product under test.
    #[must_use]
    pub const fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    /// Returns the derived mission code.
    #[must_use]
    pub const fn mission_code(&self) -> &MissionCode {
        &self.mission_code
    }

    /// Returns the email of the actor who created the mission.
    #[must_use]
    pub const fn creator(&self) -> &ActorEmail {
        &self.creator
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the SOP checklist.
    #[must_use]
    pub const fn sop(&self) -> SopChecklist {
        self.sop
    }

    /// Returns the preparation checklist.
    #[must_use]
    pub const fn prep(&self) -> PrepChecklist {
        self.prep
    }

    /// Returns the recorded review outcome, if any.
    #[must_use]
    pub const fn review_outcome(&self) -> Option<ReviewOutcome> {
        self.review_outcome
    }

    /// Returns the publication timestamp, if published.
    #[must_use]
    pub const fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
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

    /// Returns the current value of one checklist field.
    #[must_use]
    pub const fn checklist_value(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::Keywords => self.sop.keywords,
            ChecklistItem::Copywriting => self.sop.copywriting,
            ChecklistItem::Tags => self.sop.tags,
            ChecklistItem::Cover => self.sop.cover,
            ChecklistItem::Photos => self.sop.photos,
            ChecklistItem::Archive => self.sop.archive,
            ChecklistItem::DetailImages => self.prep.detail_images,
            ChecklistItem::HundredTitles => self.prep.hundred_titles,
            ChecklistItem::NoteScreenshots => self.prep.note_screenshots,
            ChecklistItem::CommentScreenshots => self.prep.comment_screenshots,
            ChecklistItem::FinalSpreadsheet => self.prep.final_spreadsheet,
        }
    }

    /// Flips one checklist field and applies the readiness gate.
    ///
    /// The flip and any advancement to ready land together, so persisting
    /// the mission once captures both. Flips never fail: fields may be
    /// toggled in any status, and completing the lists outside planning
    /// simply leaves the status alone.
    pub fn toggle_checklist(&mut self, item: ChecklistItem, clock: &impl Clock) -> ChecklistToggle {
        let decision = GateDecision::evaluate(self, item);
        self.sop = decision.sop;
        self.prep = decision.prep;
        if decision.should_advance {
            self.status = TaskStatus::Ready;
        }
        self.touch(clock);

        ChecklistToggle {
            item,
            value: self.checklist_value(item),
            advanced: decision.should_advance,
        }
    }

    /// Marks the mission as published and stamps the publication time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] unless the
    /// mission is ready. Publishing twice fails this way, so the original
    /// publication timestamp is never overwritten.
    pub fn publish(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.advance_to(TaskStatus::Published)?;
        let timestamp = clock.utc();
        self.published_at = Some(timestamp);
        self.updated_at = timestamp;
        Ok(())
    }

    /// Records the single review decision for a published mission.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DecisionRequiresPublished`] when the
    /// mission has not been published, or [`TaskDomainError::AlreadyDecided`]
    /// when an outcome is already recorded.
    pub fn record_decision(
        &mut self,
        outcome: ReviewOutcome,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if self.status != TaskStatus::Published {
            return Err(TaskDomainError::DecisionRequiresPublished {
                task_id: self.id,
                status: self.status.as_str().to_owned(),
            });
        }
        if let Some(existing) = self.review_outcome {
            return Err(TaskDomainError::AlreadyDecided {
                task_id: self.id,
                outcome: existing.as_str().to_owned(),
            });
        }

        self.review_outcome = Some(outcome);
        self.touch(clock);
        Ok(())
    }

    /// Spawns an independent retest mission for the same account, product,
    /// and creator.
    ///
    /// The retest starts from planning with empty checklists and derives a
    /// fresh mission code for its own creation date. This mission is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::RetestRequiresRetryOutcome`] unless the
    /// recorded outcome is retry.
    pub fn spawn_retest(&self, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        if self.review_outcome != Some(ReviewOutcome::Retry) {
            return Err(TaskDomainError::RetestRequiresRetryOutcome {
                task_id: self.id,
                outcome: self
                    .review_outcome
                    .map_or_else(|| "none".to_owned(), |recorded| recorded.as_str().to_owned()),
            });
        }

        Ok(Self::new(
            self.account_id.clone(),
            self.product_name.clone(),
            self.creator.clone(),
            clock,
        ))
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }

    fn advance_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_advance_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status.as_str().to_owned(),
                to: target.as_str().to_owned(),
            });
        }
        self.status = target;
        Ok(())
    }
}

impl CreatorScoped for Task {
    fn creator_email(&self) -> &ActorEmail {
        &self.creator
    }
}
