//! Domain logic - version arithmetic and release naming, independent of I/O

pub mod plan;
pub mod tag;
pub mod version;

pub use plan::ReleasePlan;
pub use tag::{commit_message, TagName, DEFAULT_TAG_PREFIX};
pub use version::{compute_version, BumpKeyword};
