//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// `major.minor.patch` strings
pub fn create_simple_versions(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}.{}.{}", i % 10, (i / 10) % 20, i % 50))
        .collect()
}

/// Strings with prerelease and build segments
pub fn create_complex_versions(count: usize) -> Vec<String> {
    const TAGS: [&str; 5] = ["alpha", "beta", "rc", "alpha.beta", "x-y-z"];

    (0..count)
        .map(|i| {
            format!(
                "{}.{}.{}-{}.{}+build.{}.sha-{:x}",
                i % 5,
                i % 7,
                i % 11,
                TAGS[i % TAGS.len()],
                i % 13,
                i,
                i * 7919
            )
        })
        .collect()
}

/// Strings that fail the grammar or identifier validation
pub fn create_invalid_versions(count: usize) -> Vec<String> {
    const SHAPES: [&str; 6] = [
        "1.0.0.0",
        "1.0.0-alpha..1",
        "1.0.0-alpha.01",
        " 1.0.0",
        "1.0.0+",
        "99999999999999999999.0.0",
    ];

    (0..count)
        .map(|i| SHAPES[i % SHAPES.len()].to_string())
        .collect()
}
