//! Checklist gate deciding readiness advancement.

use super::{ChecklistItem, PrepChecklist, SopChecklist, Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Result of evaluating a checklist flip against the readiness gate.
///
/// The gate is pure: it computes the post-flip checklist state and whether
/// the mission should advance, without touching the mission itself. The
/// aggregate applies the decision so that the flip and any advancement land
/// as one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    /// SOP checklist after the flip.
    pub sop: SopChecklist,
    /// Preparation checklist after the flip.
    pub prep: PrepChecklist,
    /// Whether the mission advances to ready.
    ///
    /// True only when the flip leaves every flag on both lists set while
    /// the mission is still planning. Later flips never regress readiness.
    pub should_advance: bool,
}

impl GateDecision {
    /// Evaluates flipping `item` on the given mission.
    #[must_use]
    pub fn evaluate(task: &Task, item: ChecklistItem) -> Self {
        let mut sop = task.sop();
        let mut prep = task.prep();
        match item {
            ChecklistItem::Keywords => sop.keywords = !sop.keywords,
            ChecklistItem::Copywriting => sop.copywriting = !sop.copywriting,
            ChecklistItem::Tags => sop.tags = !sop.tags,
            ChecklistItem::Cover => sop.cover = !sop.cover,
            ChecklistItem::Photos => sop.photos = !sop.photos,
            ChecklistItem::Archive => sop.archive = !sop.archive,
            ChecklistItem::DetailImages => prep.detail_images = !prep.detail_images,
            ChecklistItem::HundredTitles => prep.hundred_titles = !prep.hundred_titles,
            ChecklistItem::NoteScreenshots => prep.note_screenshots = !prep.note_screenshots,
            ChecklistItem::CommentScreenshots => {
                prep.comment_screenshots = !prep.comment_screenshots;
            }
            ChecklistItem::FinalSpreadsheet => prep.final_spreadsheet = !prep.final_spreadsheet,
        }

        let should_advance =
            sop.is_complete() && prep.is_complete() && task.status() == TaskStatus::Planning;

        Self {
            sop,
            prep,
            should_advance,
        }
    }
}
