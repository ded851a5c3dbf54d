//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{BufRead, Write};

use console::style;
use regex::Regex;

use crate::domain::ReleasePlan;
use crate::error::{ReleaseError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_debug, display_error, display_help, display_released, display_status,
    display_warning, format_release_summary, usage,
};

/// Answer used when the operator just presses Enter
const DEFAULT_ANSWER: &str = "y";

/// Asks the operator to confirm a release.
///
/// Prints the release summary followed by a `[y/n]` prompt, then blocks until
/// a line of input arrives. Anything other than `y`/`n` (any case) prints a
/// warning and asks again. An empty line means `y`.
///
/// # Arguments
/// * `plan` - The release about to be executed
/// * `input` - Where answers are read from (stdin in the binary)
/// * `output` - Where the summary and prompt are written
///
/// # Returns
/// * `Ok(true)` - The operator answered `y`
/// * `Ok(false)` - The operator answered `n`
/// * `Err(ReleaseError::Prompt)` - Input closed or could not be read
pub fn confirm_release<I: BufRead, W: Write>(
    plan: &ReleasePlan,
    mut input: I,
    mut output: W,
) -> Result<bool> {
    let validator = Regex::new(r"(?i)^[yn]$").map_err(|e| ReleaseError::prompt(e.to_string()))?;

    writeln!(output, "{}", format_release_summary(plan)).map_err(prompt_io)?;

    loop {
        write!(
            output,
            "{} [y/n] ({}): ",
            style("Are you sure?").yellow(),
            DEFAULT_ANSWER
        )
        .map_err(prompt_io)?;
        output.flush().map_err(prompt_io)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(prompt_io)?;
        if read == 0 {
            return Err(ReleaseError::prompt(
                "input closed before a response was given",
            ));
        }

        let answer = match line.trim() {
            "" => DEFAULT_ANSWER,
            other => other,
        };

        if validator.is_match(answer) {
            return Ok(answer.eq_ignore_ascii_case("y"));
        }

        writeln!(
            output,
            "{}",
            style("You must respond with \"y\" or \"n\"").red()
        )
        .map_err(prompt_io)?;
    }
}

fn prompt_io(err: std::io::Error) -> ReleaseError {
    ReleaseError::prompt(err.to_string())
}
