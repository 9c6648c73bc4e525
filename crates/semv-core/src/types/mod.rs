//! Core data types for semantic versioning.
//!
//! - `identifier`: prerelease/build identifier grammar and precedence
//! - `version`: the `SemanticVersion` value type

pub mod identifier;
pub mod version;

// Re-export all public types
pub use identifier::IdentifierKind;
pub use version::{compare_versions, versions_equal, SemanticVersion};
