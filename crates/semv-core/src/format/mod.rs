//! Rendering of versions under a format selector.
//!
//! Two textual forms exist: the canonical `major.minor.patch[-pre][+build]`
//! and the numeric-only `major.minor.patch`. [`VersionFormatter`] is the
//! shared, stateless entry point for hosts that dispatch on textual
//! selectors; typed callers use [`SemanticVersion::display`] directly.

use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{SemvError, SemvResult};
use crate::types::SemanticVersion;

static DEFAULT_FORMATTER: Lazy<VersionFormatter> = Lazy::new(|| VersionFormatter { _private: () });

/// Which textual representation to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatSelector {
    /// `major.minor.patch[-pre][+build]`, selected by `""`
    #[default]
    Canonical,
    /// `major.minor.patch`, selected by `"N"`
    Numeric,
}

impl FormatSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatSelector::Canonical => "",
            FormatSelector::Numeric => "N",
        }
    }
}

impl FromStr for FormatSelector {
    type Err = SemvError;

    /// Selectors are case-sensitive: `"n"` is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(FormatSelector::Canonical),
            "N" => Ok(FormatSelector::Numeric),
            other => Err(SemvError::UnsupportedFormat {
                selector: other.to_string(),
            }),
        }
    }
}

/// Formatting capability resolved through [`VersionFormatter::get_format`]
pub trait CustomFormatter: Send + Sync {
    /// Render `arg` under a textual selector
    fn format(&self, selector: &str, arg: &dyn Any) -> SemvResult<String>;
}

/// Shared stateless formatter for [`SemanticVersion`] values
#[derive(Debug)]
pub struct VersionFormatter {
    _private: (),
}

impl VersionFormatter {
    /// Process-wide instance, built on first access
    pub fn global() -> &'static VersionFormatter {
        &DEFAULT_FORMATTER
    }

    /// Render a version with an already-resolved selector
    pub fn render(&self, version: &SemanticVersion, selector: FormatSelector) -> String {
        version.display(selector).to_string()
    }

    /// Render `arg`, which must be a [`SemanticVersion`], under a textual
    /// selector
    pub fn format(&self, selector: &str, arg: &dyn Any) -> SemvResult<String> {
        let Some(version) = arg.downcast_ref::<SemanticVersion>() else {
            debug!(selector, "formatter called with a non-version argument");
            return Err(SemvError::NotAVersion);
        };

        let selector = selector.parse::<FormatSelector>().map_err(|err| {
            debug!(error = %err, "formatter rejected selector");
            err
        })?;

        Ok(self.render(version, selector))
    }

    /// Return this formatter when asked for the [`CustomFormatter`]
    /// capability, `None` for anything else
    pub fn get_format(&self, capability: TypeId) -> Option<&dyn CustomFormatter> {
        if capability == TypeId::of::<dyn CustomFormatter>() {
            Some(self)
        } else {
            None
        }
    }
}

impl CustomFormatter for VersionFormatter {
    fn format(&self, selector: &str, arg: &dyn Any) -> SemvResult<String> {
        VersionFormatter::format(self, selector, arg)
    }
}

/// Display adapter returned by [`SemanticVersion::display`]
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    version: &'a SemanticVersion,
    selector: FormatSelector,
}

impl<'a> Rendered<'a> {
    pub(crate) fn new(version: &'a SemanticVersion, selector: FormatSelector) -> Self {
        Self { version, selector }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selector {
            FormatSelector::Canonical => fmt::Display::fmt(self.version, f),
            FormatSelector::Numeric => write!(
                f,
                "{}.{}.{}",
                self.version.major(),
                self.version.minor(),
                self.version.patch()
            ),
        }
    }
}
