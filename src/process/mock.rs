use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Mutex, PoisonError};

use crate::error::{ReleaseError, Result};
use crate::process::{CommandRunner, CommandStatus, Invocation};

/// Mock runner for testing without spawning processes.
///
/// Records every invocation in order. Programs can be made to fail to launch
/// or to exit with a given code.
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    unlaunchable: HashSet<String>,
    exit_codes: HashMap<String, i32>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        RecordingRunner {
            calls: Mutex::new(Vec::new()),
            unlaunchable: HashSet::new(),
            exit_codes: HashMap::new(),
        }
    }

    /// Make `program` fail as if it were not installed
    pub fn fail_to_launch(mut self, program: impl Into<String>) -> Self {
        self.unlaunchable.insert(program.into());
        self
    }

    /// Make `program` exit with `code`
    pub fn exit_with(mut self, program: impl Into<String>, code: i32) -> Self {
        self.exit_codes.insert(program.into(), code);
        self
    }

    /// Invocations seen so far, including ones that failed to launch
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(invocation.clone());

        if self.unlaunchable.contains(&invocation.program) {
            return Err(ReleaseError::spawn(
                &invocation.program,
                io::Error::new(io::ErrorKind::NotFound, "program not found"),
            ));
        }

        let code = self.exit_codes.get(&invocation.program).copied().unwrap_or(0);
        Ok(CommandStatus { code: Some(code) })
    }
}
