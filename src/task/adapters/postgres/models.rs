//! Diesel row models for mission persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for mission records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal mission identifier.
    pub id: uuid::Uuid,
    /// Target account label.
    pub account_id: String,
    /// Product under test.
    pub product_name: String,
    /// Derived mission code.
    pub mission_code: String,
    /// Email of the creating actor.
    pub creator_email: String,
    /// Mission lifecycle status.
    pub status: String,
    /// SOP: search keywords researched and embedded.
    pub check_keywords: bool,
    /// SOP: post copywriting written and reviewed.
    pub check_copywriting: bool,
    /// SOP: topic tags chosen.
    pub check_tags: bool,
    /// SOP: cover image produced.
    pub check_cover: bool,
    /// SOP: product photo set shot and edited.
    pub check_photos: bool,
    /// SOP: draft archived to the shared library.
    pub check_archive: bool,
    /// Prep: product detail images collected.
    pub prep_detail_imgs: bool,
    /// Prep: candidate title list drafted.
    pub prep_100_titles: bool,
    /// Prep: reference note screenshots captured.
    pub prep_note_screenshots: bool,
    /// Prep: seed comment screenshots captured.
    pub prep_comment_screenshots: bool,
    /// Prep: final tracking spreadsheet filled in.
    pub prep_final_excel: bool,
    /// Review decision, once recorded.
    pub review_result: Option<String>,
    /// Publication timestamp, once published.
    pub published_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for mission records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal mission identifier.
    pub id: uuid::Uuid,
    /// Target account label.
    pub account_id: String,
    /// Product under test.
    pub product_name: String,
    /// Derived mission code.
    pub mission_code: String,
    /// Email of the creating actor.
    pub creator_email: String,
    /// Mission lifecycle status.
    pub status: String,
    /// SOP: search keywords researched and embedded.
    pub check_keywords: bool,
    /// SOP: post copywriting written and reviewed.
    pub check_copywriting: bool,
    /// SOP: topic tags chosen.
    pub check_tags: bool,
    /// SOP: cover image produced.
    pub check_cover: bool,
    /// SOP: product photo set shot and edited.
    pub check_photos: bool,
    /// SOP: draft archived to the shared library.
    pub check_archive: bool,
    /// Prep: product detail images collected.
    pub prep_detail_imgs: bool,
    /// Prep: candidate title list drafted.
    pub prep_100_titles: bool,
    /// Prep: reference note screenshots captured.
    pub prep_note_screenshots: bool,
    /// Prep: seed comment screenshots captured.
    pub prep_comment_screenshots: bool,
    /// Prep: final tracking spreadsheet filled in.
    pub prep_final_excel: bool,
    /// Review decision, once recorded.
    pub review_result: Option<String>,
    /// Publication timestamp, once published.
    pub published_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model applied when persisting mission mutations.
///
/// Checklist flips, readiness advancement, publication, and the review
/// decision all funnel through this one changeset so a single update writes
/// the full mutable state.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Mission lifecycle status.
    pub status: String,
    /// SOP: search keywords researched and embedded.
    pub check_keywords: bool,
    /// SOP: post copywriting written and reviewed.
    pub check_copywriting: bool,
    /// SOP: topic tags chosen.
    pub check_tags: bool,
    /// SOP: cover image produced.
    pub check_cover: bool,
    /// SOP: product photo set shot and edited.
    pub check_photos: bool,
    /// SOP: draft archived to the shared library.
    pub check_archive: bool,
    /// Prep: product detail images collected.
    pub prep_detail_imgs: bool,
    /// Prep: candidate title list drafted.
    pub prep_100_titles: bool,
    /// Prep: reference note screenshots captured.
    pub prep_note_screenshots: bool,
    /// Prep: seed comment screenshots captured.
    pub prep_comment_screenshots: bool,
    /// Prep: final tracking spreadsheet filled in.
    pub prep_final_excel: bool,
    /// Review decision; `None` writes NULL while undecided.
    #[diesel(treat_none_as_null = true)]
    pub review_result: Option<String>,
    /// Publication timestamp; `None` writes NULL while unpublished.
    #[diesel(treat_none_as_null = true)]
    pub published_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
