//! Domain model for long-term product operations.

mod cadence;
mod error;
mod ids;
mod product;

pub use cadence::{CadenceStatus, CadenceWindow};
pub use error::LongTermDomainError;
pub use ids::LongTermProductId;
pub use product::{LongTermProduct, PersistedLongTermProductData, SetupChecklist, SetupItem};
