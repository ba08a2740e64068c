//! Diesel schema for mission persistence.

diesel::table! {
    /// Product-testing mission records.
    tasks (id) {
        /// Internal mission identifier.
        id -> Uuid,
        /// Target account label.
        #[max_length = 64]
        account_id -> Varchar,
        /// Product under test.
        #[max_length = 255]
        product_name -> Varchar,
        /// Derived mission code; shared by same-day retests, deliberately
        /// not unique.
        #[max_length = 255]
        mission_code -> Varchar,
        /// Email of the creating actor.
        #[max_length = 255]
        creator_email -> Varchar,
        /// Mission lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// SOP: search keywords researched and embedded.
        check_keywords -> Bool,
        /// SOP: post copywriting written and reviewed.
        check_copywriting -> Bool,
        /// SOP: topic tags chosen.
        check_tags -> Bool,
        /// SOP: cover image produced.
        check_cover -> Bool,
        /// SOP: product photo set shot and edited.
        check_photos -> Bool,
        /// SOP: draft archived to the shared library.
        check_archive -> Bool,
        /// Prep: product detail images collected.
        prep_detail_imgs -> Bool,
        /// Prep: candidate title list drafted.
        prep_100_titles -> Bool,
        /// Prep: reference note screenshots captured.
        prep_note_screenshots -> Bool,
        /// Prep: seed comment screenshots captured.
        prep_comment_screenshots -> Bool,
        /// Prep: final tracking spreadsheet filled in.
        prep_final_excel -> Bool,
        /// Review decision, once recorded.
        #[max_length = 50]
        review_result -> Nullable<Varchar>,
        /// Publication timestamp, once published.
        published_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
