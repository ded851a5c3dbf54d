use crate::cli::ReleaseConfig;
use crate::domain::tag::{commit_message, TagName};
use crate::domain::version::compute_version;
use crate::error::Result;

/// Everything a release run will do, derived once from the configuration and
/// the version currently in the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub old_version: String,
    pub new_version: String,
    pub tag: TagName,
    pub message: String,
    pub dirs: Vec<String>,
}

impl ReleasePlan {
    /// Compute the new version, tag name and commit message.
    ///
    /// # Returns
    /// * `Ok(ReleasePlan)` - The derived plan
    /// * `Err(ReleaseError::InvalidSegment)` - If a bump keyword targets a non-numeric segment
    pub fn build(config: &ReleaseConfig, old_version: &str) -> Result<Self> {
        let new_version = compute_version(old_version, &config.bump, &config.suffix)?;
        let tag = TagName::new(&config.tag_prefix, &new_version);
        let message = commit_message(&tag, config.message.as_deref());

        Ok(ReleasePlan {
            old_version: old_version.to_string(),
            new_version,
            tag,
            message,
            dirs: config.dirs.clone(),
        })
    }

    /// Whether more than the current directory is affected
    pub fn spans_multiple_dirs(&self) -> bool {
        self.dirs.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bump: &str, suffix: &str, prefix: &str, message: Option<&str>) -> ReleaseConfig {
        ReleaseConfig {
            bump: bump.to_string(),
            suffix: suffix.to_string(),
            tag_prefix: prefix.to_string(),
            message: message.map(str::to_string),
            ..ReleaseConfig::default()
        }
    }

    #[test]
    fn test_default_patch_plan() {
        let plan = ReleasePlan::build(&config("patch", "", "v", None), "1.2.3").unwrap();
        assert_eq!(plan.old_version, "1.2.3");
        assert_eq!(plan.new_version, "1.2.4");
        assert_eq!(plan.tag.as_str(), "v1.2.4");
        assert_eq!(plan.message, "Release v1.2.4");
        assert_eq!(plan.dirs, vec![".".to_string()]);
        assert!(!plan.spans_multiple_dirs());
    }

    #[test]
    fn test_major_with_suffix_plan() {
        let plan = ReleasePlan::build(&config("major", "-rc", "v", None), "1.2.3").unwrap();
        assert_eq!(plan.new_version, "2.0.0-rc");
        assert_eq!(plan.message, "Release v2.0.0-rc");
    }

    #[test]
    fn test_plan_without_prefix_and_custom_message() {
        let plan =
            ReleasePlan::build(&config("minor", "", "", Some("Add export")), "1.2.3").unwrap();
        assert_eq!(plan.tag.as_str(), "1.3.0");
        assert_eq!(plan.message, "Add export (Release 1.3.0)");
    }

    #[test]
    fn test_plan_propagates_invalid_segment() {
        assert!(ReleasePlan::build(&config("minor", "", "v", None), "1.x.0").is_err());
    }
}
