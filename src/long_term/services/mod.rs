//! Application services for long-term operations orchestration.

mod ops;

pub use ops::{
    LongTermOpsError, LongTermOpsResult, LongTermOpsService, OpsDashboard, ProductCard,
};
