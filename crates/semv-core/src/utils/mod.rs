//! Utility functions and helpers.

pub mod hash;

pub use hash::{version_fingerprint, version_fingerprint_hex};
