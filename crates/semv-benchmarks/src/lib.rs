//! semv benchmarking suite
//!
//! Benchmarks for version parsing, precedence comparison and rendering.

pub mod common;

pub use common::*;
