use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::DEFAULT_TAG_PREFIX;
use crate::error::{ReleaseError, Result};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "release.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".npm-release.toml";

/// Represents the optional configuration file for npm-release.
///
/// Every key has a default, so an empty file (or no file at all) behaves like
/// the plain command line tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub files: FilesConfig,
}

fn default_bump() -> String {
    "patch".to_string()
}

fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

/// Defaults for version computation and tagging.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_bump")]
    pub default_bump: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            default_bump: default_bump(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_package_manager() -> String {
    "npm".to_string()
}

fn default_git() -> String {
    "git".to_string()
}

/// External programs invoked during a release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    #[serde(default = "default_git")]
    pub git: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            package_manager: default_package_manager(),
            git: default_git(),
        }
    }
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_stage_files() -> Vec<String> {
    vec!["package.json".to_string(), "package-lock.json".to_string()]
}

/// Files read and staged during a release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_stage_files")]
    pub stage: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest(),
            stage: default_stage_files(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in current directory
/// 3. `.npm-release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(ReleaseError::Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return parse_config_file(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return parse_config_file(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return parse_config_file(&user);
        }
    }

    Ok(Config::default())
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| ReleaseError::config(format!("invalid '{}': {}", path.display(), e)))
}
