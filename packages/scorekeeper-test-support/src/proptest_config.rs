//! Shared proptest configuration for unit and integration tests.
//!
//! Env knobs:
//! - `PROPTEST_CASES`: cases per property (default 32, at least 1).
//! - `PROPTEST_MAX_SHRINK_MS`: cap on shrinking time in milliseconds.

use proptest::prelude::ProptestConfig;

const DEFAULT_CASES: u32 = 32;

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|s| s.parse::<u32>().ok())
}

pub fn config() -> ProptestConfig {
    let base = ProptestConfig::default();
    ProptestConfig {
        // Generators build valid games directly, nothing worth persisting
        failure_persistence: None,
        cases: env_u32("PROPTEST_CASES").unwrap_or(DEFAULT_CASES).max(1),
        max_shrink_time: env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time),
        ..base
    }
}
