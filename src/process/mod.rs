//! External command abstraction layer
//!
//! Release steps are expressed as [Invocation] values and handed to a
//! [CommandRunner]. The implementations are:
//!
//! - [system::SystemRunner]: spawns the program and waits for it
//! - [dry_run::DryRunRunner]: prints what would run
//! - [mock::RecordingRunner]: records invocations for tests
//!
//! ```rust
//! # use npm_release::process::{CommandRunner, Invocation};
//! # fn example<R: CommandRunner>(runner: &R) -> npm_release::Result<()> {
//! let status = runner.run(&Invocation::new("git", ["tag", "v1.0.0"]))?;
//! if !status.success() {
//!     println!("git tag exited with {:?}", status.code);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dry_run;
pub mod mock;
pub mod system;

pub use dry_run::DryRunRunner;
pub use mock::RecordingRunner;
pub use system::SystemRunner;

use std::fmt;
use std::path::PathBuf;

use crate::error::Result;

/// How the standard output of a command is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Output goes to the terminal
    Inherit,
    /// Standard output is discarded
    Silent,
}

/// A single external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` runs in the current directory
    pub cwd: Option<PathBuf>,
    pub output: OutputMode,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            output: OutputMode::Inherit,
        }
    }

    /// Run the command inside `dir`
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Discard the command's standard output
    pub fn silent(mut self) -> Self {
        self.output = OutputMode::Silent;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        if let Some(dir) = &self.cwd {
            write!(f, " (in {})", dir.display())?;
        }
        Ok(())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn ok() -> Self {
        CommandStatus { code: Some(0) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands, one at a time.
///
/// `run` blocks until the command has exited. An `Err` means the command
/// could not be launched at all ([crate::error::ReleaseError::Spawn]); a
/// command that ran and exited non-zero is reported through [CommandStatus].
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus>;
}
