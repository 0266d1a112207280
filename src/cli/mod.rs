//! Command workflows shared by the binary and tests

pub mod orchestration;

pub use orchestration::{run_workflow, Action, WorkflowArgs, WorkflowResult};
