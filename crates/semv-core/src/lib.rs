//! # semv-core
//!
//! Parsing, validation, precedence and rendering of
//! [Semantic Versioning 2.0.0](https://semver.org) identifiers.
//!
//! This crate provides:
//! - `SemanticVersion`, an immutable value validated at construction
//! - Precedence ordering that ignores build metadata
//! - Canonical and numeric-only rendering through `VersionFormatter`
//! - `SemvError` for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: the version value and identifier grammar
//! - `format`: format selectors and the shared formatter
//! - `error`: error types and result aliases
//! - `utils`: stable fingerprints
//!
//! ```
//! use semv_core::{FormatSelector, SemanticVersion};
//!
//! let v = SemanticVersion::parse("1.2.3-alpha.1+exp.sha.5114f85").unwrap();
//! assert!(v < SemanticVersion::parse("1.2.3").unwrap());
//! assert_eq!(v.display(FormatSelector::Numeric).to_string(), "1.2.3");
//! ```

pub mod error;
pub mod format;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{SemvError, SemvResult};
pub use format::{CustomFormatter, FormatSelector, Rendered, VersionFormatter};
pub use types::{compare_versions, versions_equal, SemanticVersion};
