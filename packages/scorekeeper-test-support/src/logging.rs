//! Test logging shared by unit and integration tests.
//!
//! The crate's unit tests and every integration test binary install this
//! through a `ctor` hook, so individual tests never call it themselves.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber with a quiet `warn` default.
///
/// Level precedence: `TEST_LOG`, then `RUST_LOG`, then the default.
///
/// ```bash
/// TEST_LOG=scorekeeper=debug cargo test -p scorekeeper
/// ```
pub fn init() {
    init_with_default("warn");
}

/// Same as [`init`] with a caller-chosen fallback filter.
///
/// Only the first call in a process has any effect.
pub fn init_with_default(default_filter: &str) {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest capture
            .without_time()
            .with_target(true)
            .try_init()
            .ok(); // another subscriber may already be global
    });
}
