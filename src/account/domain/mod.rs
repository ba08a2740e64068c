//! Domain model for the social account pool.

mod account;
mod error;
mod ids;

pub use account::{
    Account, AccountProfile, AccountStatus, AccountSummary, PersistedAccountData,
};
pub use error::{AccountDomainError, ParseAccountStatusError};
pub use ids::AccountId;
