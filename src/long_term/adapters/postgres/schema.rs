//! Diesel schema for long-term product persistence.

diesel::table! {
    /// Long-term operations roster records.
    long_term_products (id) {
        /// Internal product record identifier.
        id -> Uuid,
        /// Home account label.
        #[max_length = 64]
        account_id -> Varchar,
        /// Product under long-term operation.
        #[max_length = 255]
        product_name -> Varchar,
        /// Email of the creating actor, inherited from the promoted
        /// mission.
        #[max_length = 255]
        creator_email -> Varchar,
        /// Setup: reusable comment library assembled.
        setup_library -> Bool,
        /// Setup: initial batch of seeded reviews placed.
        setup_20_reviews -> Bool,
        /// Latest daily comment check completion.
        last_daily_check -> Nullable<Timestamptz>,
        /// Latest weekly cover refresh completion.
        last_weekly_cover -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
