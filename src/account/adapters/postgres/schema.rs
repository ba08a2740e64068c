//! Diesel schema for account pool persistence.

diesel::table! {
    /// Social account pool records.
    accounts (id) {
        /// Operator-assigned account label.
        #[max_length = 64]
        id -> Varchar,
        /// Device identifier running this account.
        #[max_length = 255]
        phone_id -> Varchar,
        /// SIM slot label on the device.
        #[max_length = 64]
        sim_slot -> Varchar,
        /// Human-readable account name.
        #[max_length = 255]
        account_name -> Varchar,
        /// Pool status.
        #[max_length = 50]
        status -> Varchar,
        /// Latest observed view count while warming.
        warming_view_count -> Int8,
        /// Free-form operator note.
        note -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
