use std::process::{Command, Stdio};

use crate::error::{ReleaseError, Result};
use crate::process::{CommandRunner, CommandStatus, Invocation, OutputMode};
use crate::ui;

/// Runs commands as real child processes
#[derive(Debug, Default)]
pub struct SystemRunner {
    verbose: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner::default()
    }

    /// Print each command before it runs
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        if self.verbose {
            ui::display_debug(&invocation.to_string());
        }

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        if invocation.output == OutputMode::Silent {
            cmd.stdout(Stdio::null());
        }

        let status = cmd
            .status()
            .map_err(|e| ReleaseError::spawn(&invocation.program, e))?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
