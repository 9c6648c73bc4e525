//! Semantic version value type.
//!
//! A [`SemanticVersion`] is validated atomically at construction and is
//! immutable afterwards. Build metadata is carried for display only and never
//! takes part in ordering, equality or hashing.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::{debug, trace};

use super::identifier::{self, IdentifierKind};
use crate::error::{SemvError, SemvResult};
use crate::format::{FormatSelector, Rendered, VersionFormatter};
use crate::utils::hash::{version_fingerprint, version_fingerprint_hex};

/// `major(.minor)?(.patch)?(-pre)?(+build)?`, anchored on both ends
static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+))?(?:\.(?P<patch>[0-9]+))?(?:-(?P<pre>[0-9A-Za-z.-]+))?(?:\+(?P<build>[0-9A-Za-z.-]+))?$",
    )
    .expect("version pattern is a valid regex")
});

/// Semantic version (major.minor.patch-prerelease+build)
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: String,
    build: String,
    /// Derived from `prerelease`, never set on its own
    pre_identifiers: Vec<String>,
}

impl SemanticVersion {
    /// Create a new version, validating every field before anything is built.
    ///
    /// Pass empty strings for an absent prerelease or build.
    pub fn new(
        major: i64,
        minor: i64,
        patch: i64,
        prerelease: impl Into<String>,
        build: impl Into<String>,
    ) -> SemvResult<Self> {
        let major = non_negative("major", major)?;
        let minor = non_negative("minor", minor)?;
        let patch = non_negative("patch", patch)?;

        Self::from_parts(major, minor, patch, prerelease.into(), build.into())
    }

    /// Validate identifiers and assemble the value; shared by `new` and
    /// `try_parse` so both accept the full `u64` range
    fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: String,
        build: String,
    ) -> SemvResult<Self> {
        if !identifier::is_valid(&prerelease, IdentifierKind::Prerelease) {
            return Err(SemvError::InvalidPrerelease { prerelease });
        }

        if !identifier::is_valid(&build, IdentifierKind::Build) {
            return Err(SemvError::InvalidBuild { build });
        }

        let pre_identifiers = identifier::split(&prerelease);
        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
            pre_identifiers,
        })
    }

    /// Create a release version with no prerelease or build metadata
    pub fn release(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build: String::new(),
            pre_identifiers: Vec::new(),
        }
    }

    /// Parse a version string, returning `None` on any failure
    pub fn parse(input: &str) -> Option<Self> {
        Self::try_parse(input).ok()
    }

    /// Parse a version string.
    ///
    /// Every failure, whether a grammar mismatch or a rejected field, is
    /// reported as [`SemvError::Parse`] carrying only the input text.
    pub fn try_parse(input: &str) -> SemvResult<Self> {
        let failure = || SemvError::Parse {
            input: input.to_string(),
        };

        let Some(caps) = VERSION_PATTERN.captures(input) else {
            trace!(input, "text does not match version grammar");
            return Err(failure());
        };

        let (Some(major), Some(minor), Some(patch)) = (
            component(&caps, "major"),
            component(&caps, "minor"),
            component(&caps, "patch"),
        ) else {
            trace!(input, "numeric component overflows");
            return Err(failure());
        };

        let prerelease = caps.name("pre").map_or("", |m| m.as_str());
        let build = caps.name("build").map_or("", |m| m.as_str());

        Self::from_parts(major, minor, patch, prerelease.to_string(), build.to_string()).map_err(
            |err| {
                debug!(input, error = %err, hint = err.suggestion(), "rejecting version string");
                failure()
            },
        )
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease string, empty when absent
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata, empty when absent
    pub fn build(&self) -> &str {
        &self.build
    }

    /// Prerelease split on '.'
    pub fn prerelease_identifiers(&self) -> &[String] {
        &self.pre_identifiers
    }

    /// Check if this is a prerelease version
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub fn has_build(&self) -> bool {
        !self.build.is_empty()
    }

    /// A version is stable once major is above zero and it is not a prerelease
    pub fn is_stable(&self) -> bool {
        self.major > 0 && self.prerelease.is_empty()
    }

    /// Compare against a value of any type.
    ///
    /// Only another `SemanticVersion` can be compared; anything else is a
    /// programming error reported as [`SemvError::TypeMismatch`].
    pub fn compare_any<T: Any>(&self, other: &T) -> SemvResult<Ordering> {
        (other as &dyn Any)
            .downcast_ref::<SemanticVersion>()
            .map(|other| self.cmp(other))
            .ok_or(SemvError::TypeMismatch {
                type_name: type_name::<T>(),
            })
    }

    /// Display adapter for the given selector
    pub fn display(&self, selector: FormatSelector) -> Rendered<'_> {
        Rendered::new(self, selector)
    }

    /// Render with a textual selector: `""` for the full form, `"N"` for
    /// `major.minor.patch` only
    pub fn to_string_with(&self, selector: &str) -> SemvResult<String> {
        VersionFormatter::global().format(selector, self)
    }

    /// Stable 64-bit hash of the precedence-significant fields
    pub fn fingerprint(&self) -> u64 {
        version_fingerprint(self.major, self.minor, self.patch, &self.prerelease)
    }

    /// Full Blake3 digest behind [`fingerprint`](Self::fingerprint), in hex
    pub fn fingerprint_hex(&self) -> String {
        version_fingerprint_hex(self.major, self.minor, self.patch, &self.prerelease)
    }

    /// Get the precedence for comparison (ignores build metadata)
    fn precedence_cmp(&self, other: &Self) -> Ordering {
        match (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch)) {
            Ordering::Equal => identifier::compare_prerelease(
                &self.prerelease,
                &self.pre_identifiers,
                &other.prerelease,
                &other.pre_identifiers,
            ),
            other => other,
        }
    }
}

fn non_negative(component: &'static str, value: i64) -> SemvResult<u64> {
    u64::try_from(value).map_err(|_| SemvError::OutOfRange { component, value })
}

/// Captured digit run, defaulting to zero when the group is absent
fn component(caps: &Captures<'_>, name: &str) -> Option<u64> {
    match caps.name(name) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

/// Three-way comparison of two versions
pub fn compare_versions(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    a.cmp(b)
}

/// Equality ignoring build metadata
pub fn versions_equal(a: &SemanticVersion, b: &SemanticVersion) -> bool {
    a == b
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.precedence_cmp(other).is_eq()
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        state.write_usize(self.prerelease.len());
        for b in self.prerelease.bytes() {
            state.write_u8(b.to_ascii_uppercase());
        }
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_cmp(other)
    }
}

impl FromStr for SemanticVersion {
    type Err = SemvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SemanticVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SemanticVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_parse(&text).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn std_hash(v: &SemanticVersion) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    fn identifier() -> impl Strategy<Value = String> {
        prop_oneof![
            "[1-9][0-9]{0,3}",
            Just("0".to_string()),
            // wider than u64, ranks as alphanumeric
            "[1-9][0-9]{20,30}",
            Just(u64::MAX.to_string()),
            "[a-zA-Z-][0-9a-zA-Z-]{0,5}",
        ]
    }

    fn numeric_component() -> impl Strategy<Value = u64> {
        prop_oneof![0u64..4, Just(u64::MAX), (u64::MAX - 2)..=u64::MAX, any::<u64>()]
    }

    fn prerelease() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            prop::collection::vec(identifier(), 1..4).prop_map(|ids| ids.join(".")),
        ]
    }

    fn build() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            prop::collection::vec("[0-9a-zA-Z-]{1,6}", 1..3).prop_map(|ids| ids.join(".")),
        ]
    }

    fn version() -> impl Strategy<Value = SemanticVersion> {
        (numeric_component(), numeric_component(), numeric_component(), prerelease(), build()).prop_map(
            |(ma, mi, pa, pre, b)| {
                SemanticVersion::from_parts(ma, mi, pa, pre, b).expect("generated fields are valid")
            },
        )
    }

    // Parsing never panics
    proptest! {
        #[test]
        fn parse_is_total(input in "\\PC*") {
            let _ = SemanticVersion::parse(&input);
        }

        #[test]
        fn parse_is_total_on_version_like_text(input in "[0-9.+a-z-]{0,40}") {
            let _ = SemanticVersion::parse(&input);
        }

        #[test]
        fn long_digit_runs_do_not_panic(digits in "[2-9][0-9]{19,59}") {
            prop_assert!(SemanticVersion::parse(&digits).is_none());
            let _ = SemanticVersion::parse(&format!("1.0.0-{}", digits));
        }
    }

    // Canonical text survives a round trip
    proptest! {
        #[test]
        fn version_round_trip(v in version()) {
            let text = v.to_string();
            let parsed = SemanticVersion::parse(&text).expect("canonical text parses");

            prop_assert_eq!(parsed.to_string(), text);
            prop_assert_eq!(parsed.build(), v.build());
            prop_assert_eq!(parsed.prerelease(), v.prerelease());
        }
    }

    // Ordering is a total order consistent with equality and hashing
    proptest! {
        #[test]
        fn comparison_is_antisymmetric(a in version(), b in version()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn comparison_is_transitive(a in version(), b in version(), c in version()) {
            if a <= b && b <= c {
                prop_assert!(a <= c, "Transitivity violated: {} <= {} <= {} but {} > {}", a, b, c, a, c);
            }
            if a >= b && b >= c {
                prop_assert!(a >= c, "Transitivity violated: {} >= {} >= {} but {} < {}", a, b, c, a, c);
            }
        }

        #[test]
        fn equality_matches_comparison(a in version(), b in version()) {
            prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
            if a == b {
                prop_assert_eq!(std_hash(&a), std_hash(&b));
                prop_assert_eq!(a.fingerprint(), b.fingerprint());
            }
        }

        #[test]
        fn build_metadata_is_ignored(v in version(), b1 in build(), b2 in build()) {
            let x = SemanticVersion::from_parts(v.major(), v.minor(), v.patch(), v.prerelease().to_string(), b1)
                .expect("valid build");
            let y = SemanticVersion::from_parts(v.major(), v.minor(), v.patch(), v.prerelease().to_string(), b2)
                .expect("valid build");

            prop_assert_eq!(&x, &y);
            prop_assert_eq!(x.cmp(&y), Ordering::Equal);
            prop_assert_eq!(std_hash(&x), std_hash(&y));
        }

        #[test]
        fn case_of_prerelease_is_ignored(v in version()) {
            let upper = SemanticVersion::from_parts(
                v.major(),
                v.minor(),
                v.patch(),
                v.prerelease().to_ascii_uppercase(),
                v.build().to_string(),
            )
            .expect("uppercasing keeps identifiers valid");

            prop_assert_eq!(&upper, &v);
            prop_assert_eq!(std_hash(&upper), std_hash(&v));
        }
    }
}
