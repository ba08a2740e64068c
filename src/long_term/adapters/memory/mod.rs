//! In-memory adapters for long-term operations ports.

mod product;

pub use product::InMemoryLongTermProductRepository;
