//! Warning types for non-fatal configuration loading problems.
//!
//! Responsibilities:
//! - Describe why a consulted file contributed nothing to the mapping.
//!
//! Does NOT handle:
//! - Fatal errors; loading cannot fail and no error type propagates.
//!
//! Invariants:
//! - Parse warnings NEVER include raw `.env` line contents to prevent
//!   secret leakage; only the byte index of the failure is reported.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// A non-fatal problem with one of the consulted `.env` files.
///
/// The affected file contributes no keys; loading continues with the
/// remaining sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file exists but has invalid syntax.
    ///
    /// SAFETY: carries only the byte index of the parse failure, NOT the
    /// offending line content.
    #[error("failed to parse {} at position {error_index}", path.display())]
    Parse { path: PathBuf, error_index: usize },

    /// The file exists but could not be read.
    #[error("failed to read {}: {kind}", path.display())]
    Io { path: PathBuf, kind: ErrorKind },

    /// Unknown loading failure (future variants from the dotenvy crate).
    #[error("failed to load {}", path.display())]
    Unknown { path: PathBuf },
}

impl LoadWarning {
    /// Path of the file the warning refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadWarning::Parse { path, .. }
            | LoadWarning::Io { path, .. }
            | LoadWarning::Unknown { path } => path,
        }
    }
}
