//! Service layer for mission creation, gating, publication, and review.

use crate::account::{
    domain::{AccountDomainError, AccountId, AccountSummary},
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::identity::domain::{Actor, ActorEmail, IdentityDomainError, visible_to};
use crate::task::{
    domain::{
        ChecklistItem, ChecklistToggle, ProductName, ReviewOutcome, Task, TaskDomainError,
        TaskId, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    account_id: String,
    product_name: String,
    creator: String,
}

impl CreateTaskRequest {
    /// Creates a request from the raw account label, product name, and
    /// creator email.
    #[must_use]
    pub fn new(
        account_id: impl Into<String>,
        product_name: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            product_name: product_name.into(),
            creator: creator.into(),
        }
    }
}

/// Service-level errors for mission flow operations.
#[derive(Debug, Error)]
pub enum TaskFlowError {
    /// Mission domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Account label validation failed.
    #[error(transparent)]
    Account(#[from] AccountDomainError),
    /// Creator email validation failed.
    #[error(transparent)]
    Identity(#[from] IdentityDomainError),
    /// Mission repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Account repository operation failed.
    #[error(transparent)]
    AccountRepository(#[from] AccountRepositoryError),
}

/// Result type for mission flow service operations.
pub type TaskFlowResult<T> = Result<T, TaskFlowError>;

/// One mission on the board together with its resolved account details.
///
/// The account is `None` when the mission references a label no longer in
/// the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCard {
    /// The mission itself.
    pub task: Task,
    /// Compact details of the targeted account, when still enrolled.
    pub account: Option<AccountSummary>,
}

/// Missions visible to one actor, grouped into status lanes.
///
/// Lanes preserve the newest-first ordering of the underlying listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBoard {
    /// Missions still being prepared.
    pub planning: Vec<TaskCard>,
    /// Missions cleared for publication.
    pub ready: Vec<TaskCard>,
    /// Published missions awaiting or carrying a review decision.
    pub published: Vec<TaskCard>,
}

/// Mission flow orchestration service.
#[derive(Clone)]
pub struct TaskFlowService<R, A, C>
where
    R: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    accounts: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> TaskFlowService<R, A, C>
where
    R: TaskRepository,
    A: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new mission flow service.
    ///
    /// The account repository only feeds the board read model; mission
    /// mutations never touch it.
    #[must_use]
    pub const fn new(tasks: Arc<R>, accounts: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            accounts,
            clock,
        }
    }

    /// Creates a new planning mission.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError`] when the account label, product name, or
    /// creator email fails validation, or when the repository rejects
    /// persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskFlowResult<Task> {
        let account_id = AccountId::new(request.account_id)?;
        let product_name = ProductName::new(request.product_name)?;
        let creator = ActorEmail::new(request.creator)?;

        let task = Task::new(account_id, product_name, creator, &*self.clock);
        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Flips one checklist field, advancing the mission to ready when the
    /// flip completes both checklists during planning.
    ///
    /// The aggregate is mutated optimistically and restored to its exact
    /// pre-flip state when persistence fails, advancement included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::Repository`] when the update fails.
    pub async fn toggle_checklist(
        &self,
        task: &mut Task,
        item: ChecklistItem,
    ) -> TaskFlowResult<ChecklistToggle> {
        let snapshot = task.clone();
        let toggle = task.toggle_checklist(item, &*self.clock);
        self.persist_or_rollback(task, snapshot).await?;
        Ok(toggle)
    }

    /// Publishes a ready mission, stamping its publication time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError`] when the mission is not ready or the
    /// update fails.
    pub async fn publish(&self, task: &mut Task) -> TaskFlowResult<()> {
        let snapshot = task.clone();
        task.publish(&*self.clock)?;
        self.persist_or_rollback(task, snapshot).await
    }

    /// Records the single review decision on a published mission.
    ///
    /// Follow-up records (retests, promotions) are handled separately by
    /// the decision router once the outcome is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError`] when the mission is not published, already
    /// decided, or the update fails.
    pub async fn record_decision(
        &self,
        task: &mut Task,
        outcome: ReviewOutcome,
    ) -> TaskFlowResult<()> {
        let snapshot = task.clone();
        task.record_decision(outcome, &*self.clock)?;
        self.persist_or_rollback(task, snapshot).await
    }

    /// Retrieves a mission by its identifier.
    ///
    /// Returns `Ok(None)` when the mission does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::Repository`] when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskFlowResult<Option<Task>> {
        Ok(self.tasks.find_by_id(id).await?)
    }

    /// Returns the missions the actor may view, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::Repository`] when the listing fails.
    pub async fn visible_tasks(&self, actor: &Actor) -> TaskFlowResult<Vec<Task>> {
        let tasks = self.tasks.list().await?;
        Ok(visible_to(actor, tasks))
    }

    /// Builds the status-lane board for the actor, with account details
    /// resolved onto each card.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError`] when either listing fails.
    pub async fn board(&self, actor: &Actor) -> TaskFlowResult<TaskBoard> {
        let tasks = self.visible_tasks(actor).await?;
        let accounts = self.accounts.list().await?;
        let summaries: HashMap<AccountId, AccountSummary> = accounts
            .iter()
            .map(|account| (account.id().clone(), AccountSummary::from(account)))
            .collect();

        let mut board = TaskBoard::default();
        for task in tasks {
            let account = summaries.get(task.account_id()).cloned();
            let card = TaskCard { task, account };
            match card.task.status() {
                TaskStatus::Planning => board.planning.push(card),
                TaskStatus::Ready => board.ready.push(card),
                TaskStatus::Published => board.published.push(card),
            }
        }
        Ok(board)
    }

    async fn persist_or_rollback(&self, task: &mut Task, snapshot: Task) -> TaskFlowResult<()> {
        if let Err(err) = self.tasks.update(task).await {
            *task = snapshot;
            return Err(err.into());
        }
        Ok(())
    }
}
