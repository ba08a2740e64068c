//! In-memory adapters for mission lifecycle ports.

mod task;

pub use task::InMemoryTaskRepository;
