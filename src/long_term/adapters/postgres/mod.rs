//! `PostgreSQL` adapters for long-term operations persistence.

mod models;
mod repository;
mod schema;

pub use repository::{LongTermPgPool, PostgresLongTermProductRepository};
