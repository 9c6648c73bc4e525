//! Blake3 fingerprints of version precedence.
//!
//! Unlike `std::hash::Hash`, these values are stable across processes and
//! builds, so they can be stored or compared between runs. Only the fields
//! that take part in equality are hashed; the prerelease is ASCII-uppercased
//! first so versions differing only in case share a fingerprint.

fn precedence_hash(major: u64, minor: u64, patch: u64, prerelease: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&major.to_le_bytes());
    hasher.update(&minor.to_le_bytes());
    hasher.update(&patch.to_le_bytes());
    hasher.update(prerelease.to_ascii_uppercase().as_bytes());
    hasher.finalize()
}

/// First eight bytes of the Blake3 digest as a little-endian integer
pub fn version_fingerprint(major: u64, minor: u64, patch: u64, prerelease: &str) -> u64 {
    let hash = precedence_hash(major, minor, patch, prerelease);
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

/// Full Blake3 digest in hex
pub fn version_fingerprint_hex(major: u64, minor: u64, patch: u64, prerelease: &str) -> String {
    precedence_hash(major, minor, patch, prerelease)
        .to_hex()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = version_fingerprint(1, 2, 3, "alpha.1");
        let b = version_fingerprint(1, 2, 3, "alpha.1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_ignores_case() {
        assert_eq!(
            version_fingerprint(1, 0, 0, "rc"),
            version_fingerprint(1, 0, 0, "RC")
        );
    }

    #[test]
    fn test_fingerprint_distinguishes_fields() {
        assert_ne!(version_fingerprint(1, 0, 0, ""), version_fingerprint(0, 1, 0, ""));
        assert_ne!(version_fingerprint(1, 0, 0, ""), version_fingerprint(1, 0, 0, "alpha"));
    }

    #[test]
    fn test_fingerprint_hex() {
        let hex = version_fingerprint_hex(1, 2, 3, "");

        // 32 bytes = 64 hex chars
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
