//! Error types and result aliases for semv operations.
//!
//! Construction and rendering report precise causes. Parsing deliberately
//! collapses every cause into [`SemvError::Parse`] so callers can probe
//! "is this a version string" without inspecting failure details.

use thiserror::Error;

/// Unified error type for all semv operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemvError {
    // Construction errors
    #[error("Version component '{component}' must be non-negative, got {value}")]
    OutOfRange { component: &'static str, value: i64 },

    #[error("Invalid prerelease identifier: {prerelease}")]
    InvalidPrerelease { prerelease: String },

    #[error("Invalid build metadata: {build}")]
    InvalidBuild { build: String },

    // Rendering errors
    #[error("Unsupported format selector: {selector}")]
    UnsupportedFormat { selector: String },

    #[error("Formatter argument must be a SemanticVersion")]
    NotAVersion,

    // Parse errors
    #[error("Invalid version string: {input}")]
    Parse { input: String },

    // Comparison errors
    #[error("Cannot compare a SemanticVersion with {type_name}")]
    TypeMismatch { type_name: &'static str },
}

/// Result type alias for semv operations
pub type SemvResult<T> = Result<T, SemvError>;

impl SemvError {
    /// A numeric component was negative
    pub fn is_range_error(&self) -> bool {
        matches!(self, SemvError::OutOfRange { .. })
    }

    /// Identifier grammar or render selector/argument was rejected
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            SemvError::InvalidPrerelease { .. }
                | SemvError::InvalidBuild { .. }
                | SemvError::UnsupportedFormat { .. }
                | SemvError::NotAVersion
        )
    }

    /// Input text was not a valid version
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, SemvError::Parse { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SemvError::InvalidPrerelease { .. } => Some(
                "Use dot-separated [0-9A-Za-z-] identifiers without empty parts or leading zeros",
            ),
            SemvError::InvalidBuild { .. } => {
                Some("Use dot-separated [0-9A-Za-z-] identifiers without empty parts")
            },
            SemvError::UnsupportedFormat { .. } => {
                Some("Use an empty selector for the full form or \"N\" for major.minor.patch")
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let range = SemvError::OutOfRange {
            component: "major",
            value: -1,
        };
        assert!(range.is_range_error());
        assert!(!range.is_format_error());

        let pre = SemvError::InvalidPrerelease {
            prerelease: "alpha..1".to_string(),
        };
        assert!(pre.is_format_error());
        assert!(pre.suggestion().is_some());

        let parse = SemvError::Parse {
            input: "1.0.0.0".to_string(),
        };
        assert!(parse.is_parse_failure());
        assert!(!parse.is_format_error());
        assert_eq!(parse.suggestion(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = SemvError::OutOfRange {
            component: "patch",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "Version component 'patch' must be non-negative, got -3"
        );

        let err = SemvError::UnsupportedFormat {
            selector: "n".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported format selector: n");
    }
}
