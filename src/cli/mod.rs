//! Command workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{choose_tag, run_tag_workflow, TagRequest, WorkflowResult};
