//! Domain model for actor identity and visibility.

mod actor;
mod error;
mod visibility;

pub use actor::{Actor, ActorEmail, Role};
pub use error::{IdentityDomainError, ParseRoleError};
pub use visibility::{CreatorScoped, visible_to};
