//! Shared helpers for scorekeeper tests.

pub mod fixtures;
pub mod logging;
pub mod proptest_config;
