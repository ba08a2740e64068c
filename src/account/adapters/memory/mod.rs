//! In-memory adapters for account pool ports.

mod account;

pub use account::InMemoryAccountRepository;
