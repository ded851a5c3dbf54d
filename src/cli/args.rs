//! Command line arguments and their normalization into a [ReleaseConfig].

use std::collections::HashSet;

use clap::Parser;

use crate::config::{Config, FilesConfig, ToolsConfig};
use crate::domain::DEFAULT_TAG_PREFIX;

/// Directory every release starts from
pub const CURRENT_DIR: &str = ".";

/// Raw command line arguments.
///
/// clap's generated help is disabled; `-h/--help` only sets [Args::help] and
/// the fixed usage text is printed by the driver.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(
    name = "npm-release",
    about = "Bump the package version, commit and tag the release",
    disable_help_flag = true
)]
pub struct Args {
    /// Bump keyword (major, minor, patch) or an explicit version
    #[arg(short = 'v', value_name = "BUMP")]
    pub bump: Option<String>,

    /// Custom commit message
    #[arg(short = 'm', value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,

    #[arg(long = "git-tag-prefix", value_name = "PREFIX")]
    pub git_tag_prefix: Option<String>,

    /// Tag with the bare version
    #[arg(long = "git-tag-prefix-none")]
    pub git_tag_prefix_none: bool,

    /// Appended to the new version as "-<suffix>"
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Additional package directory (repeatable)
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dirs: Vec<String>,

    /// Custom configuration file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print every command before it runs
    #[arg(long)]
    pub verbose: bool,

    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

/// Settings for one release run, built once from the command line and the
/// configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Target directories, starting with ".", deduplicated in first-seen order
    pub dirs: Vec<String>,
    /// Bump keyword or explicit version
    pub bump: String,
    /// Already carries its leading "-", or is empty
    pub suffix: String,
    pub tag_prefix: String,
    pub message: Option<String>,
    pub yes: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub tools: ToolsConfig,
    pub files: FilesConfig,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            dirs: vec![CURRENT_DIR.to_string()],
            bump: "patch".to_string(),
            suffix: String::new(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            message: None,
            yes: false,
            dry_run: false,
            verbose: false,
            tools: ToolsConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Args {
    /// Normalize the raw arguments, filling gaps from the configuration file.
    ///
    /// - `-v` is trimmed; blank or absent falls back to the configured default bump
    /// - `--git-tag-prefix-none` wins over any prefix; an empty prefix falls back
    /// - `--suffix rc` becomes `-rc`
    /// - empty `-m` and `-d` values are ignored
    pub fn normalize(&self, file: &Config) -> ReleaseConfig {
        let bump = non_empty(self.bump.as_deref().map(str::trim))
            .or_else(|| non_empty(Some(file.version.default_bump.trim())))
            .unwrap_or("patch")
            .to_string();

        let tag_prefix = if self.git_tag_prefix_none {
            String::new()
        } else {
            non_empty(self.git_tag_prefix.as_deref())
                .unwrap_or(file.version.tag_prefix.as_str())
                .to_string()
        };

        let suffix = non_empty(self.suffix.as_deref())
            .map(|s| format!("-{}", s))
            .unwrap_or_default();

        ReleaseConfig {
            dirs: normalize_dirs(&self.dirs),
            bump,
            suffix,
            tag_prefix,
            message: non_empty(self.message.as_deref()).map(str::to_string),
            yes: self.yes,
            dry_run: self.dry_run,
            verbose: self.verbose,
            tools: file.tools.clone(),
            files: file.files.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// "." followed by the extra directories, empty entries dropped and
/// duplicates removed while keeping first-seen order.
fn normalize_dirs(extra: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(CURRENT_DIR)
        .chain(extra.iter().map(String::as_str))
        .filter(|dir| !dir.is_empty())
        .filter(|dir| seen.insert(*dir))
        .map(str::to_string)
        .collect()
}
