use thiserror::Error;

use crate::domain::BumpKeyword;

/// Unified error type for npm-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error(
        "Unable to '{keyword}' auto increment non-numeric version segment (segment '{segment}' from '{version}')."
    )]
    InvalidSegment {
        keyword: BumpKeyword,
        segment: String,
        version: String,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in npm-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a prompt error with context
    pub fn prompt(msg: impl Into<String>) -> Self {
        ReleaseError::Prompt(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Wrap a launch failure of an external program
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        ReleaseError::Spawn {
            program: program.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_segment_message() {
        let err = ReleaseError::InvalidSegment {
            keyword: BumpKeyword::Minor,
            segment: "x".to_string(),
            version: "1.x.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to 'minor' auto increment non-numeric version segment (segment 'x' from '1.x.0')."
        );
    }

    #[test]
    fn test_spawn_error_names_program() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = ReleaseError::spawn("npm", io_err);
        let msg = err.to_string();
        assert!(msg.contains("'npm'"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_prompt_error_message() {
        let err = ReleaseError::prompt("input closed before a response was given");
        assert_eq!(
            err.to_string(),
            "Prompt failed: input closed before a response was given"
        );
    }

    #[test]
    fn test_manifest_error_message() {
        let err = ReleaseError::manifest("'package.json' has no \"version\" field");
        assert_eq!(
            err.to_string(),
            "Manifest error: 'package.json' has no \"version\" field"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ReleaseError::config("invalid 'release.toml': expected `]`");
        assert!(matches!(err, ReleaseError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid 'release.toml': expected `]`"
        );
    }
}
