//! Main workflow orchestration logic
//!
//! Ties the pieces together in order: read the manifest, build the plan,
//! confirm, execute. Kept apart from `main.rs` so the whole flow can be driven
//! with a mock runner and scripted input.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::ReleaseConfig;
use crate::domain::ReleasePlan;
use crate::error::Result;
use crate::executor::ReleaseExecutor;
use crate::manifest;
use crate::process::CommandRunner;
use crate::ui;

/// How a release run ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// All steps were issued
    Released { version: String, tag: String },
    /// The operator answered "n"; nothing was touched
    Declined,
}

/// Reads the current version from the configured manifest and derives the plan.
pub fn load_plan(config: &ReleaseConfig) -> Result<ReleasePlan> {
    let old_version = manifest::read_version(Path::new(&config.files.manifest))?;
    ReleasePlan::build(config, &old_version)
}

/// Runs the confirmation gate (unless `yes` is set) and then the release.
///
/// # Arguments
/// * `config` - Normalized settings for this run
/// * `plan` - The release to apply
/// * `runner` - Executes the package manager and git commands
/// * `input` / `output` - Terminal used for the confirmation prompt
///
/// # Returns
/// * `Ok(WorkflowOutcome)` - Released or declined
/// * `Err` - Prompt failure or a command that could not be launched
pub fn run_release_workflow<R, I, W>(
    config: &ReleaseConfig,
    plan: &ReleasePlan,
    runner: &R,
    input: I,
    output: W,
) -> Result<WorkflowOutcome>
where
    R: CommandRunner,
    I: BufRead,
    W: Write,
{
    if !config.yes && !ui::confirm_release(plan, input, output)? {
        return Ok(WorkflowOutcome::Declined);
    }

    ReleaseExecutor::new(runner, &config.tools, &config.files).execute(plan)?;

    Ok(WorkflowOutcome::Released {
        version: plan.new_version.clone(),
        tag: plan.tag.to_string(),
    })
}
