//! Application services for mission orchestration.

mod decision;
mod flow;

pub use decision::{DecisionRouter, DecisionRouterError, DecisionRouterResult};
pub use flow::{
    CreateTaskRequest, TaskBoard, TaskCard, TaskFlowError, TaskFlowResult, TaskFlowService,
};
