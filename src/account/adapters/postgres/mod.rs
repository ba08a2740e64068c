//! `PostgreSQL` adapters for account pool persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AccountPgPool, PostgresAccountRepository};
