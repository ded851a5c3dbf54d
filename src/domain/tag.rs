use std::fmt;

/// Prefix used for release tags when none is configured
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// Name of the git tag created for a release (prefix + version)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName {
    pub name: String,
}

impl TagName {
    /// Build a tag name from a prefix and a version, e.g. ("v", "1.2.3") -> "v1.2.3"
    pub fn new(prefix: &str, version: &str) -> Self {
        TagName {
            name: format!("{}{}", prefix, version),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// True when the tag carries a prefix and so reads differently from the
    /// bare version
    pub fn differs_from(&self, version: &str) -> bool {
        self.name != version
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Commit message for a release.
///
/// `Release <tag>` by default, or `<custom> (Release <tag>)` when a custom
/// message is given.
pub fn commit_message(tag: &TagName, custom: Option<&str>) -> String {
    let base = format!("Release {}", tag);
    match custom {
        Some(message) => format!("{} ({})", message, base),
        None => base,
    }
}
