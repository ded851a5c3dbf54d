use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use npm_release::cli::{load_plan, run_release_workflow, Args, WorkflowOutcome};
use npm_release::config;
use npm_release::process::{DryRunRunner, SystemRunner};
use npm_release::ui;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::try_parse()?;

    if args.help {
        ui::display_help();
        return Ok(());
    }

    let file_config = config::load_config(args.config.as_deref())?;
    let config = args.normalize(&file_config);
    let plan = load_plan(&config)?;

    let stdin = io::stdin();
    let outcome = if config.dry_run {
        run_release_workflow(&config, &plan, &DryRunRunner, stdin.lock(), io::stdout())?
    } else {
        let runner = SystemRunner::new().verbose(config.verbose);
        run_release_workflow(&config, &plan, &runner, stdin.lock(), io::stdout())?
    };

    match outcome {
        WorkflowOutcome::Released { version, .. } if config.dry_run => {
            ui::display_status(&format!("Dry run for {}: nothing was changed", version));
        }
        WorkflowOutcome::Released { version, .. } => ui::display_released(&version),
        WorkflowOutcome::Declined => ui::display_status("Release cancelled, nothing was changed"),
    }

    Ok(())
}
