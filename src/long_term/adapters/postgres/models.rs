//! Diesel row models for long-term product persistence.

use super::schema::long_term_products;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for long-term product records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = long_term_products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LongTermProductRow {
    /// Internal product record identifier.
    pub id: uuid::Uuid,
    /// Home account label.
    pub account_id: String,
    /// Product under long-term operation.
    pub product_name: String,
    /// Email of the creating actor.
    pub creator_email: String,
    /// Setup: reusable comment library assembled.
    pub setup_library: bool,
    /// Setup: initial batch of seeded reviews placed.
    pub setup_20_reviews: bool,
    /// Latest daily comment check completion.
    pub last_daily_check: Option<DateTime<Utc>>,
    /// Latest weekly cover refresh completion.
    pub last_weekly_cover: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for long-term product records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = long_term_products)]
pub struct NewLongTermProductRow {
    /// Internal product record identifier.
    pub id: uuid::Uuid,
    /// Home account label.
    pub account_id: String,
    /// Product under long-term operation.
    pub product_name: String,
    /// Email of the creating actor.
    pub creator_email: String,
    /// Setup: reusable comment library assembled.
    pub setup_library: bool,
    /// Setup: initial batch of seeded reviews placed.
    pub setup_20_reviews: bool,
    /// Latest daily comment check completion.
    pub last_daily_check: Option<DateTime<Utc>>,
    /// Latest weekly cover refresh completion.
    pub last_weekly_cover: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model applied when persisting product mutations.
///
/// Setup flips and cadence marks funnel through this one changeset so a
/// single update writes the full mutable state.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = long_term_products)]
pub struct LongTermProductChangeset {
    /// Setup: reusable comment library assembled.
    pub setup_library: bool,
    /// Setup: initial batch of seeded reviews placed.
    pub setup_20_reviews: bool,
    /// Latest daily check; `None` writes NULL while never completed.
    #[diesel(treat_none_as_null = true)]
    pub last_daily_check: Option<DateTime<Utc>>,
    /// Latest weekly cover; `None` writes NULL while never completed.
    #[diesel(treat_none_as_null = true)]
    pub last_weekly_cover: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
