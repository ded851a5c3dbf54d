use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Which segment of a `major.minor.patch` version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKeyword {
    Major,
    Minor,
    Patch,
}

impl BumpKeyword {
    /// Index of the segment this keyword increments
    pub fn segment_index(self) -> usize {
        match self {
            BumpKeyword::Major => 0,
            BumpKeyword::Minor => 1,
            BumpKeyword::Patch => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BumpKeyword::Major => "major",
            BumpKeyword::Minor => "minor",
            BumpKeyword::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKeyword {
    type Err = ();

    /// Only the exact lowercase keywords are accepted; anything else is an
    /// explicit version string.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpKeyword::Major),
            "minor" => Ok(BumpKeyword::Minor),
            "patch" => Ok(BumpKeyword::Patch),
            _ => Err(()),
        }
    }
}

/// Computes the new version string.
///
/// If `spec` is a bump keyword, the addressed segment of `old_version` is
/// incremented by one and every following segment up to patch is reset to `0`.
/// Any other `spec` is taken verbatim as the new version. `suffix` is appended
/// to the result unconditionally.
///
/// # Arguments
/// * `old_version` - Current version, dot-delimited (e.g. "1.2.3")
/// * `spec` - `major`, `minor`, `patch` or an explicit version
/// * `suffix` - Appended as-is (callers embed their own `-`)
///
/// # Returns
/// * `Ok(String)` - The new version
/// * `Err(ReleaseError::InvalidSegment)` - If the addressed segment is not numeric
///
/// # Example
/// ```ignore
/// assert_eq!(compute_version("1.2.3", "minor", "")?, "1.3.0");
/// assert_eq!(compute_version("1.2.3", "major", "-rc")?, "2.0.0-rc");
/// assert_eq!(compute_version("1.2.3", "5.0.0", "")?, "5.0.0");
/// ```
pub fn compute_version(old_version: &str, spec: &str, suffix: &str) -> Result<String> {
    let version = match spec.parse::<BumpKeyword>() {
        Ok(keyword) => bump_segments(old_version, keyword)?,
        Err(()) => spec.to_string(),
    };

    Ok(format!("{}{}", version, suffix))
}

fn bump_segments(old_version: &str, keyword: BumpKeyword) -> Result<String> {
    let mut parts: Vec<String> = old_version.split('.').map(str::to_string).collect();
    let idx = keyword.segment_index();

    let raw = parts.get(idx).map(String::as_str).unwrap_or("");
    let digits = leading_digits(raw).ok_or_else(|| ReleaseError::InvalidSegment {
        keyword,
        segment: raw.to_string(),
        version: old_version.to_string(),
    })?;

    let next = increment_decimal(digits);
    parts[idx] = next;

    for i in idx + 1..=BumpKeyword::Patch.segment_index() {
        if i < parts.len() {
            parts[i] = "0".to_string();
        } else {
            parts.push("0".to_string());
        }
    }

    Ok(parts.join("."))
}

/// The run of decimal digits at the start of a segment, so "3-beta" reads
/// as "3". `None` when the segment does not start with a digit.
fn leading_digits(segment: &str) -> Option<&str> {
    let trimmed = segment.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    (end > 0).then(|| &trimmed[..end])
}

/// Adds one to a string of ASCII digits without a width limit. Leading zeros
/// are dropped ("007" -> "8").
fn increment_decimal(digits: &str) -> String {
    let significant = digits.trim_start_matches('0');
    let mut bytes: Vec<u8> = if significant.is_empty() {
        vec![b'0']
    } else {
        significant.bytes().collect()
    };

    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }

    let mut carried = String::with_capacity(bytes.len() + 1);
    carried.push('1');
    carried.push_str(&String::from_utf8_lossy(&bytes));
    carried
}
