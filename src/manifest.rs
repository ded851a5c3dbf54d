//! Reading the current version from a `package.json` manifest.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Reads the `version` field of a package manifest.
///
/// # Returns
/// * `Ok(String)` - The version string as written in the manifest
/// * `Err(ReleaseError::Manifest)` - If the file is missing, not JSON, or has no version
pub fn read_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| ReleaseError::manifest(format!("cannot read '{}': {}", path.display(), e)))?;

    let manifest: PackageManifest = serde_json::from_str(&content)
        .map_err(|e| ReleaseError::manifest(format!("invalid '{}': {}", path.display(), e)))?;

    manifest.version.ok_or_else(|| {
        ReleaseError::manifest(format!("'{}' has no \"version\" field", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_version() {
        let file = manifest_with(r#"{ "name": "demo", "version": "1.2.3", "private": true }"#);
        assert_eq!(read_version(file.path()).unwrap(), "1.2.3");
    }

    #[test]
    fn test_missing_version_field() {
        let file = manifest_with(r#"{ "name": "demo" }"#);
        let err = read_version(file.path()).unwrap_err();
        assert!(err.to_string().contains("no \"version\" field"));
    }

    #[test]
    fn test_invalid_json() {
        let file = manifest_with("{ not json");
        assert!(matches!(
            read_version(file.path()),
            Err(ReleaseError::Manifest(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_version(Path::new("/nonexistent/package.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
