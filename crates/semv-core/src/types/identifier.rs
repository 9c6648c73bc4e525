//! Dot-separated identifier grammar shared by prerelease and build metadata.
//!
//! An identifier is a non-empty run of `[0-9A-Za-z-]`. Prerelease identifiers
//! that are all digits must not carry a leading zero; build identifiers may.

use std::cmp::Ordering;

/// Which trailing segment an identifier sequence belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Prerelease,
    Build,
}

/// Check whether an identifier consists only of ASCII digits
pub fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric value of an identifier, if it ranks as numeric.
///
/// Digit runs too wide for `u64` rank as alphanumeric.
fn numeric_value(identifier: &str) -> Option<u64> {
    if is_numeric(identifier) {
        identifier.parse().ok()
    } else {
        None
    }
}

fn is_identifier_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Validate a full dot-separated sequence. The empty string means "absent"
/// and is always valid.
pub fn is_valid(sequence: &str, kind: IdentifierKind) -> bool {
    if sequence.is_empty() {
        return true;
    }

    sequence.split('.').all(|identifier| {
        if identifier.is_empty() || !identifier.bytes().all(is_identifier_char) {
            return false;
        }

        match kind {
            IdentifierKind::Prerelease => {
                !(is_numeric(identifier) && identifier.len() > 1 && identifier.starts_with('0'))
            },
            IdentifierKind::Build => true,
        }
    })
}

/// Split a prerelease string into its identifiers
pub fn split(sequence: &str) -> Vec<String> {
    if sequence.is_empty() {
        return Vec::new();
    }
    sequence.split('.').map(str::to_owned).collect()
}

/// Ordinal comparison on ASCII-uppercased bytes
fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}

/// Compare two identifiers at the same position
fn cmp_identifier(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        // numeric identifiers rank below alphanumeric ones
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => cmp_ignore_ascii_case(a, b),
    }
}

/// Precedence of two prerelease strings with their pre-split identifiers.
///
/// An empty prerelease (a release) outranks any non-empty one. When every
/// shared position ties, the longer raw string wins.
pub fn compare_prerelease(a: &str, a_ids: &[String], b: &str, b_ids: &[String]) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match (a.is_empty(), b.is_empty()) {
        (true, _) => return Ordering::Greater,
        (_, true) => return Ordering::Less,
        _ => {},
    }

    a_ids
        .iter()
        .zip(b_ids)
        .map(|(x, y)| cmp_identifier(x, y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
