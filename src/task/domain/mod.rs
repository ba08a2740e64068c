//! Domain model for product-testing missions.
//!
//! The mission domain models checklist-gated preparation, forward-only
//! status advancement, publication, and the single review decision, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod checklist;
mod error;
mod gate;
mod ids;
mod mission;
mod product;
mod status;
mod task;

pub use checklist::{ChecklistItem, ChecklistToggle, PrepChecklist, SopChecklist};
pub use error::{
    ParseReviewOutcomeError, ParseTaskStatusError, TaskDomainError,
};
pub use gate::GateDecision;
pub use ids::TaskId;
pub use mission::MissionCode;
pub use product::ProductName;
pub use status::{FollowUp, ReviewOutcome, TaskStatus};
pub use task::{PersistedTaskData, Task};
