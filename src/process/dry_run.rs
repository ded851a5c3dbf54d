use crate::error::Result;
use crate::process::{CommandRunner, CommandStatus, Invocation};
use crate::ui;

/// Prints every command instead of running it
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        ui::display_status(&format!("Would run: {}", invocation));
        Ok(CommandStatus::ok())
    }
}
