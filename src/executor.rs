//! Applies a release plan: versions every directory, then commits and tags once.

use crate::config::{FilesConfig, ToolsConfig};
use crate::domain::ReleasePlan;
use crate::error::Result;
use crate::process::{CommandRunner, Invocation};
use crate::ui;

/// Runs the package manager and git steps of a release through a [CommandRunner].
///
/// Steps run strictly in order and stop at the first command that cannot be
/// launched. Nothing is rolled back: directories versioned before a failure
/// stay modified.
pub struct ReleaseExecutor<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a ToolsConfig,
    files: &'a FilesConfig,
}

impl<'a, R: CommandRunner> ReleaseExecutor<'a, R> {
    pub fn new(runner: &'a R, tools: &'a ToolsConfig, files: &'a FilesConfig) -> Self {
        ReleaseExecutor {
            runner,
            tools,
            files,
        }
    }

    /// Execute the plan.
    ///
    /// 1. For each directory: `<pm> version <new> --no-git-tag-version` (stdout
    ///    discarded), then `git add <stage files>`
    /// 2. `git commit -m <message>`
    /// 3. `git tag <tag>` (lightweight)
    ///
    /// # Returns
    /// * `Ok(())` - Every command was launched
    /// * `Err(ReleaseError::Spawn)` - A command could not be launched
    pub fn execute(&self, plan: &ReleasePlan) -> Result<()> {
        for dir in &plan.dirs {
            self.run(
                Invocation::new(
                    &self.tools.package_manager,
                    ["version", plan.new_version.as_str(), "--no-git-tag-version"],
                )
                .in_dir(dir)
                .silent(),
            )?;

            let mut add_args = vec!["add".to_string()];
            add_args.extend(self.files.stage.iter().cloned());
            self.run(Invocation::new(&self.tools.git, add_args).in_dir(dir))?;
        }

        self.run(Invocation::new(
            &self.tools.git,
            ["commit", "-m", plan.message.as_str()],
        ))?;
        self.run(Invocation::new(&self.tools.git, ["tag", plan.tag.as_str()]))?;

        Ok(())
    }

    fn run(&self, invocation: Invocation) -> Result<()> {
        let status = self.runner.run(&invocation)?;
        if !status.success() {
            let code = status
                .code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            ui::display_warning(&format!("'{}' exited with {}", invocation, code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagName;
    use crate::error::ReleaseError;
    use crate::process::{OutputMode, RecordingRunner};
    use std::path::PathBuf;

    fn plan(dirs: &[&str]) -> ReleasePlan {
        ReleasePlan {
            old_version: "1.2.3".to_string(),
            new_version: "1.2.4".to_string(),
            tag: TagName::new("v", "1.2.4"),
            message: "Release v1.2.4".to_string(),
            dirs: dirs.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_dir_sequence() {
        let runner = RecordingRunner::new();
        let tools = ToolsConfig::default();
        let files = FilesConfig::default();

        ReleaseExecutor::new(&runner, &tools, &files)
            .execute(&plan(&["."]))
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 4);

        assert_eq!(calls[0].program, "npm");
        assert_eq!(calls[0].args, vec!["version", "1.2.4", "--no-git-tag-version"]);
        assert_eq!(calls[0].cwd, Some(PathBuf::from(".")));
        assert_eq!(calls[0].output, OutputMode::Silent);

        assert_eq!(calls[1].args, vec!["add", "package.json", "package-lock.json"]);
        assert_eq!(calls[1].cwd, Some(PathBuf::from(".")));

        assert_eq!(calls[2].args, vec!["commit", "-m", "Release v1.2.4"]);
        assert_eq!(calls[2].cwd, None);

        assert_eq!(calls[3].args, vec!["tag", "v1.2.4"]);
    }

    #[test]
    fn test_dirs_processed_before_single_commit() {
        let runner = RecordingRunner::new();
        let tools = ToolsConfig::default();
        let files = FilesConfig::default();

        ReleaseExecutor::new(&runner, &tools, &files)
            .execute(&plan(&[".", "a", "b"]))
            .unwrap();

        let summary: Vec<(String, Option<PathBuf>)> = runner
            .calls()
            .into_iter()
            .map(|c| (format!("{} {}", c.program, c.args[0]), c.cwd))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("npm version".to_string(), Some(PathBuf::from("."))),
                ("git add".to_string(), Some(PathBuf::from("."))),
                ("npm version".to_string(), Some(PathBuf::from("a"))),
                ("git add".to_string(), Some(PathBuf::from("a"))),
                ("npm version".to_string(), Some(PathBuf::from("b"))),
                ("git add".to_string(), Some(PathBuf::from("b"))),
                ("git commit".to_string(), None),
                ("git tag".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_launch_failure_stops_immediately() {
        let runner = RecordingRunner::new().fail_to_launch("npm");
        let tools = ToolsConfig::default();
        let files = FilesConfig::default();

        let result = ReleaseExecutor::new(&runner, &tools, &files).execute(&plan(&[".", "a"]));

        assert!(matches!(result, Err(ReleaseError::Spawn { .. })));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_nonzero_exit_continues() {
        let runner = RecordingRunner::new().exit_with("git", 1);
        let tools = ToolsConfig::default();
        let files = FilesConfig::default();

        ReleaseExecutor::new(&runner, &tools, &files)
            .execute(&plan(&["."]))
            .unwrap();

        assert_eq!(runner.calls().len(), 4);
    }

    #[test]
    fn test_configured_tools_and_files() {
        let runner = RecordingRunner::new();
        let tools = ToolsConfig {
            package_manager: "pnpm".to_string(),
            git: "/usr/bin/git".to_string(),
        };
        let files = FilesConfig {
            manifest: "package.json".to_string(),
            stage: vec!["package.json".to_string(), "pnpm-lock.yaml".to_string()],
        };

        ReleaseExecutor::new(&runner, &tools, &files)
            .execute(&plan(&["."]))
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0].program, "pnpm");
        assert_eq!(calls[1].program, "/usr/bin/git");
        assert_eq!(calls[1].args, vec!["add", "package.json", "pnpm-lock.yaml"]);
    }
}
