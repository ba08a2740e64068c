//! Publication checklists gating mission readiness.
//!
//! Every mission carries two checklists: the content SOP covering the post
//! itself, and the preparation evidence collected around it. A mission only
//! becomes ready once every flag on both lists is set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content SOP checklist covering the post itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SopChecklist {
    /// Search keywords researched and embedded.
    pub keywords: bool,
    /// Post copywriting written and reviewed.
    pub copywriting: bool,
    /// Topic tags chosen.
    pub tags: bool,
    /// Cover image produced.
    pub cover: bool,
    /// Product photo set shot and edited.
    pub photos: bool,
    /// Draft archived to the shared library.
    pub archive: bool,
}

impl SopChecklist {
    /// Returns whether every SOP flag is set.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.keywords && self.copywriting && self.tags && self.cover && self.photos && self.archive
    }
}

/// Preparation evidence checklist collected around the post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepChecklist {
    /// Product detail images collected.
    pub detail_images: bool,
    /// Candidate title list drafted.
    pub hundred_titles: bool,
    /// Reference note screenshots captured.
    pub note_screenshots: bool,
    /// Seed comment screenshots captured.
    pub comment_screenshots: bool,
    /// Final tracking spreadsheet filled in.
    pub final_spreadsheet: bool,
}

impl PrepChecklist {
    /// Returns whether every preparation flag is set.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.detail_images
            && self.hundred_titles
            && self.note_screenshots
            && self.comment_screenshots
            && self.final_spreadsheet
    }
}

/// A single toggleable checklist field across both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    /// SOP: search keywords researched and embedded.
    Keywords,
    /// SOP: post copywriting written and reviewed.
    Copywriting,
    /// SOP: topic tags chosen.
    Tags,
    /// SOP: cover image produced.
    Cover,
    /// SOP: product photo set shot and edited.
    Photos,
    /// SOP: draft archived to the shared library.
    Archive,
    /// Prep: product detail images collected.
    DetailImages,
    /// Prep: candidate title list drafted.
    HundredTitles,
    /// Prep: reference note screenshots captured.
    NoteScreenshots,
    /// Prep: seed comment screenshots captured.
    CommentScreenshots,
    /// Prep: final tracking spreadsheet filled in.
    FinalSpreadsheet,
}

impl ChecklistItem {
    /// All checklist items in board display order.
    pub const ALL: [Self; 11] = [
        Self::Keywords,
        Self::Copywriting,
        Self::Tags,
        Self::Cover,
        Self::Photos,
        Self::Archive,
        Self::DetailImages,
        Self::HundredTitles,
        Self::NoteScreenshots,
        Self::CommentScreenshots,
        Self::FinalSpreadsheet,
    ];

    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Copywriting => "copywriting",
            Self::Tags => "tags",
            Self::Cover => "cover",
            Self::Photos => "photos",
            Self::Archive => "archive",
            Self::DetailImages => "detail_images",
            Self::HundredTitles => "hundred_titles",
            Self::NoteScreenshots => "note_screenshots",
            Self::CommentScreenshots => "comment_screenshots",
            Self::FinalSpreadsheet => "final_spreadsheet",
        }
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Outcome of toggling one checklist field on a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistToggle {
    /// Field that was flipped.
    pub item: ChecklistItem,
    /// Value of the field after the flip.
    pub value: bool,
    /// Whether the flip completed both checklists and advanced the mission
    /// to ready.
    pub advanced: bool,
}
