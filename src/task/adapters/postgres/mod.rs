//! `PostgreSQL` adapters for mission lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
