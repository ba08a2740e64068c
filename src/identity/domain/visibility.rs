//! Creator-based record scoping applied by read paths.

use super::{Actor, ActorEmail};

/// Records attributed to the actor who created them.
pub trait CreatorScoped {
    /// Returns the email of the actor who created this record.
    fn creator_email(&self) -> &ActorEmail;
}

/// Filters `records` down to those the actor may view.
///
/// Supervisors keep the full set; operators keep only records whose creator
/// email matches their own exactly. Relative ordering is preserved.
#[must_use]
pub fn visible_to<T: CreatorScoped>(actor: &Actor, mut records: Vec<T>) -> Vec<T> {
    records.retain(|record| actor.can_view(record.creator_email()));
    records
}
