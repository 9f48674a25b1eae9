//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the three-tier merge precedence and its edge cases.
//! - Test `.env` file handling, including broken-file recovery.
//! - Test environment-name resolution from the snapshot.
//!
//! Does NOT handle:
//! - File parsing details (tested in parse.rs).
//! - Environment-name trimming rules (tested in env.rs).
//!
//! Invariants:
//! - Tests touching the live process environment use `serial_test` plus
//!   `global_test_lock()` to prevent cross-test contamination.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a process-env snapshot from string slices.
pub fn snapshot(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
