//! Connection and schema helpers for the `PostgreSQL` smoke suite.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{RunQueryDsl, sql_query};
use eyre::{Result, WrapErr};

/// Connection pool type shared by the smoke tests.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const SCHEMA_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS accounts (
        id VARCHAR(64) PRIMARY KEY,
        phone_id VARCHAR(255) NOT NULL,
        sim_slot VARCHAR(64) NOT NULL,
        account_name VARCHAR(255) NOT NULL,
        status VARCHAR(50) NOT NULL,
        warming_view_count BIGINT NOT NULL,
        note TEXT,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id UUID PRIMARY KEY,
        account_id VARCHAR(64) NOT NULL,
        product_name VARCHAR(255) NOT NULL,
        mission_code VARCHAR(255) NOT NULL,
        creator_email VARCHAR(255) NOT NULL,
        status VARCHAR(50) NOT NULL,
        check_keywords BOOLEAN NOT NULL,
        check_copywriting BOOLEAN NOT NULL,
        check_tags BOOLEAN NOT NULL,
        check_cover BOOLEAN NOT NULL,
        check_photos BOOLEAN NOT NULL,
        check_archive BOOLEAN NOT NULL,
        prep_detail_imgs BOOLEAN NOT NULL,
        prep_100_titles BOOLEAN NOT NULL,
        prep_note_screenshots BOOLEAN NOT NULL,
        prep_comment_screenshots BOOLEAN NOT NULL,
        prep_final_excel BOOLEAN NOT NULL,
        review_result VARCHAR(50),
        published_at TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS long_term_products (
        id UUID PRIMARY KEY,
        account_id VARCHAR(64) NOT NULL,
        product_name VARCHAR(255) NOT NULL,
        creator_email VARCHAR(255) NOT NULL,
        setup_library BOOLEAN NOT NULL,
        setup_20_reviews BOOLEAN NOT NULL,
        last_daily_check TIMESTAMPTZ,
        last_weekly_cover TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
];

/// Builds a pool against the configured test database, creating the schema
/// on the way. Returns `None` when no database is configured.
pub fn test_pool() -> Result<Option<PgPool>> {
    let url = std::env::var("MISSIONFLOW_TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"));
    let Ok(url) = url else {
        return Ok(None);
    };

    let pool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(url))
        .wrap_err("failed to connect to the test database")?;

    let mut connection = pool.get().wrap_err("failed to check out a connection")?;
    for ddl in SCHEMA_DDL {
        sql_query(*ddl)
            .execute(&mut connection)
            .wrap_err("failed to create the test schema")?;
    }

    Ok(Some(pool))
}

/// Returns a unique account label so repeated runs never collide.
pub fn unique_label(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
