//! Result type produced by the configuration loader.
//!
//! Responsibilities:
//! - Hold the merged key/value mapping returned by `ConfigLoader::load`.
//! - Carry the warnings and loaded-file paths observed during the load.
//!
//! Does NOT handle:
//! - Merging logic or precedence (see loader/builder.rs).
//! - Emitting diagnostics (the loader mirrors warnings to `tracing`).
//!
//! Invariants:
//! - Keys are case-sensitive and unique; absence from the map is the only
//!   representation of "unset".
//! - `warnings` holds at most one entry per consulted file.
//! - `loaded_files` lists the files that were successfully parsed, in the
//!   order they were merged; a valid but empty file still counts as loaded.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::loader::LoadWarning;

/// The merged configuration produced by a single load.
///
/// Values come from the highest-precedence source that defines the key:
/// process environment, then the environment-specific file, then the base
/// file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    values: HashMap<String, String>,
    warnings: Vec<LoadWarning>,
    loaded_files: Vec<PathBuf>,
}

impl LoadedConfig {
    pub(crate) fn new(
        values: HashMap<String, String>,
        warnings: Vec<LoadWarning>,
        loaded_files: Vec<PathBuf>,
    ) -> Self {
        Self {
            values,
            warnings,
            loaded_files,
        }
    }

    /// Look up a key, returning `None` when it is unset in every source.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the key is set in any source.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys in the merged mapping.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the merged entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Non-fatal problems encountered while loading, one per affected file.
    ///
    /// These are observational only; a warned file simply contributed no
    /// keys to the mapping.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Paths of the files that were successfully parsed, in merge order.
    ///
    /// A valid but empty file appears here even though it contributed no
    /// keys.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    /// Consume the result, keeping only the merged mapping.
    pub fn into_map(self) -> HashMap<String, String> {
        self.values
    }
}
