//! Process environment handling for the loader.
//!
//! Responsibilities:
//! - Snapshot the live process environment as the highest-precedence tier.
//! - Resolve the current environment name from a snapshot.
//!
//! Does NOT handle:
//! - `.env` file parsing (see parse.rs).
//! - Merging (see builder.rs).
//!
//! Invariants:
//! - The process environment is read-only from this crate's perspective.
//! - An empty or whitespace-only environment name counts as unset.
//! - Entries whose key or value is not valid Unicode are dropped, never
//!   panicked on.

use crate::constants::ENV_NAME_VAR;

/// Snapshot every currently-set process environment variable.
///
/// Taken once per load so the merge sees a consistent view. Iterates via
/// `vars_os` because `std::env::vars()` panics on non-Unicode entries, which
/// are legal on Linux; such entries are skipped instead.
pub(crate) fn process_env_snapshot() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            let value = value.into_string().ok()?;
            Some((key, value))
        })
        .collect()
}

/// Resolve the environment name from a snapshot.
///
/// Reads the `NODE_ENV` entry, returning `None` if unset, empty, or
/// whitespace-only. The returned value is trimmed.
pub(crate) fn environment_name(vars: &[(String, String)]) -> Option<String> {
    vars.iter()
        .find(|(key, _)| key == ENV_NAME_VAR)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
