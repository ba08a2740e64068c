//! Diesel row models for account persistence.

use super::schema::accounts;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// Operator-assigned account label.
    pub id: String,
    /// Device identifier running this account.
    pub phone_id: String,
    /// SIM slot label on the device.
    pub sim_slot: String,
    /// Human-readable account name.
    pub account_name: String,
    /// Pool status.
    pub status: String,
    /// Latest observed view count while warming.
    pub warming_view_count: i64,
    /// Free-form operator note.
    pub note: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Operator-assigned account label.
    pub id: String,
    /// Device identifier running this account.
    pub phone_id: String,
    /// SIM slot label on the device.
    pub sim_slot: String,
    /// Human-readable account name.
    pub account_name: String,
    /// Pool status.
    pub status: String,
    /// Latest observed view count while warming.
    pub warming_view_count: i64,
    /// Free-form operator note.
    pub note: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model applied when persisting account mutations.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = accounts)]
pub struct AccountChangeset {
    /// Device identifier running this account.
    pub phone_id: String,
    /// SIM slot label on the device.
    pub sim_slot: String,
    /// Human-readable account name.
    pub account_name: String,
    /// Pool status.
    pub status: String,
    /// Latest observed view count while warming.
    pub warming_view_count: i64,
    /// Free-form operator note; `None` clears the stored note.
    #[diesel(treat_none_as_null = true)]
    pub note: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
