//! Command line surface: argument parsing and the release workflow.

pub mod args;
pub mod orchestration;

pub use args::{Args, ReleaseConfig, CURRENT_DIR};
pub use orchestration::{load_plan, run_release_workflow, WorkflowOutcome};
