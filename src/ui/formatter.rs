//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Styling goes through `console`, which drops colours when stdout is not a terminal.

use console::style;

use crate::domain::ReleasePlan;

/// Format and print an error message in red, surrounded by blank lines.
pub fn display_error(message: &str) {
    println!("\n{}\n", style(message.trim()).red());
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a non-fatal warning.
pub fn display_warning(message: &str) {
    println!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Format and print a gray debug line.
pub fn display_debug(message: &str) {
    println!("{}", style(format!("DEBUG {}", message)).dim());
}

/// Display the final line of a successful release.
///
/// Nothing is pushed, so the line carries a reminder to push manually.
pub fn display_released(version: &str) {
    println!(
        "\n    {} {}\n",
        style(format!("✔ {}", version)).green(),
        style("(you still need to manually push the commit and tag)").dim()
    );
}

/// Builds the summary shown before asking for confirmation.
///
/// The tag is mentioned only when it differs from the bare version, and the
/// directory list only when more than one directory is affected.
pub fn format_release_summary(plan: &ReleasePlan) -> String {
    let mut summary = format!(
        "This will change version from \"{}\" to \"{}\"",
        plan.old_version,
        style(&plan.new_version).cyan()
    );

    if plan.tag.differs_from(&plan.new_version) {
        summary.push_str(&format!(" (tagged as \"{}\")...", style(&plan.tag).cyan()));
    } else {
        summary.push_str("...");
    }

    if plan.spans_multiple_dirs() {
        let dirs: Vec<String> = plan.dirs.iter().map(|d| format!("\"{}\"", d)).collect();
        summary.push_str(&format!(
            "\n{}",
            style(format!("(Affected dirs: {})", dirs.join(" "))).dim()
        ));
    }

    summary
}

/// Fixed usage text printed for `-h`/`--help`.
pub fn usage() -> String {
    format!(
        r#"
    {}
        npm-release [-v major|minor|patch|X.Y.Z]    (default: "patch")
                    [-m message]
                    [--yes]
                    [--git-tag-prefix prefix]    (default: "v")
                    [--git-tag-prefix-none]      (will not prefix git tag)
                    [--suffix suffix]
                    [-d|--dir extraDir]          (repeatable)
                    [--config path]              (default: ./release.toml)
                    [--dry-run]                  (print commands, change nothing)
                    [--verbose]                  (print commands as they run)
                    [-h|--help]
"#,
        style("Usage:").yellow()
    )
}

/// Print the usage text.
pub fn display_help() {
    println!("{}", usage());
}
