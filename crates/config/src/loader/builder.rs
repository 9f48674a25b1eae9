//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide the builder-pattern `ConfigLoader` and its infallible `load()`.
//! - Merge the three tiers in precedence order: base file, environment file,
//!   process environment snapshot (last writer wins).
//!
//! Does NOT handle:
//! - File parsing (delegated to parse.rs).
//! - Environment-name resolution (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - `load()` always returns a mapping; file problems become warnings.
//! - The environment file is only consulted when an environment name is
//!   known, either forced via the builder or read from the snapshot.
//! - Merged values are never logged; diagnostics carry paths and key counts
//!   only.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::env::{environment_name, process_env_snapshot};
use super::parse::parse_env_file;
use super::warning::LoadWarning;
use crate::constants::{BASE_ENV_FILE, ENV_FILE_PREFIX};
use crate::types::LoadedConfig;

/// Load configuration with default settings.
///
/// Equivalent to `ConfigLoader::new().load()`: searches the current working
/// directory for `.env` and `.env.<NODE_ENV>`, then layers the live process
/// environment on top.
pub fn load() -> LoadedConfig {
    ConfigLoader::new().load()
}

/// Builder for a single configuration load.
///
/// Each setter overrides one ambient default; `load()` consumes the builder
/// and performs the merge.
pub struct ConfigLoader {
    project_root: Option<PathBuf>,
    environment: Option<String>,
    process_env: Option<Vec<(String, String)>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            project_root: None,
            environment: None,
            process_env: None,
        }
    }

    /// Set the directory searched for the `.env` files.
    ///
    /// Defaults to the current working directory.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Force the environment name, bypassing the `NODE_ENV` lookup.
    pub fn with_environment(mut self, name: impl Into<String>) -> Self {
        self.environment = Some(name.into());
        self
    }

    /// Inject the process-environment snapshot (primarily for testing).
    ///
    /// When set, the loader reads nothing from the live process environment,
    /// including the `NODE_ENV` signal.
    pub fn with_process_env<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.process_env = Some(vars.into_iter().collect());
        self
    }

    /// Load and merge the configuration tiers.
    ///
    /// Precedence, highest first: process environment snapshot, the
    /// `.env.<name>` file, the `.env` file. Missing files are skipped;
    /// unreadable or unparseable files contribute nothing and are reported
    /// via [`LoadedConfig::warnings`] and `tracing::warn!`. This function
    /// cannot fail.
    pub fn load(self) -> LoadedConfig {
        let project_root = self.project_root.unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        });
        let process_env = self.process_env.unwrap_or_else(process_env_snapshot);
        let environment = self
            .environment
            .or_else(|| environment_name(&process_env));

        let mut values = HashMap::new();
        let mut warnings = Vec::new();
        let mut loaded_files = Vec::new();

        let base_path = project_root.join(BASE_ENV_FILE);
        merge_file(&base_path, &mut values, &mut warnings, &mut loaded_files);

        if let Some(name) = &environment {
            let env_path = project_root.join(format!("{ENV_FILE_PREFIX}{name}"));
            merge_file(&env_path, &mut values, &mut warnings, &mut loaded_files);
        }

        // Process environment wins last, even with empty-string values.
        for (key, value) in process_env {
            values.insert(key, value);
        }

        tracing::debug!(keys = values.len(), "merged configuration assembled");
        LoadedConfig::new(values, warnings, loaded_files)
    }
}

/// Merge one file's pairs into the mapping, recording the outcome.
fn merge_file(
    path: &Path,
    values: &mut HashMap<String, String>,
    warnings: &mut Vec<LoadWarning>,
    loaded_files: &mut Vec<PathBuf>,
) {
    match parse_env_file(path) {
        Ok(Some(pairs)) => {
            tracing::info!(
                path = %path.display(),
                keys = pairs.len(),
                "loaded config file"
            );
            for (key, value) in pairs {
                values.insert(key, value);
            }
            loaded_files.push(path.to_path_buf());
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "config file not found, skipping");
        }
        Err(warning) => {
            tracing::warn!(warning = %warning, "ignoring broken config file");
            warnings.push(warning);
        }
    }
}
