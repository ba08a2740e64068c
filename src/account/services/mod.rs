//! Application services for account pool orchestration.

mod pool;

pub use pool::{
    AccountPoolError, AccountPoolResult, AccountPoolService, EnrollAccountRequest,
};
