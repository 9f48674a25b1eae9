//! `.env` file parsing.
//!
//! Responsibilities:
//! - Parse one flat `KEY=VALUE` file into key/value pairs via dotenvy.
//! - Distinguish "file not found" (skip) from "file broken" (warn).
//!
//! Does NOT handle:
//! - Merging pairs into the result mapping (see builder.rs).
//!
//! Invariants:
//! - The process environment is never touched; `dotenvy::from_path_iter` is
//!   used instead of `dotenvy::dotenv()` for exactly this reason.
//! - A file that fails mid-parse contributes nothing, not a partial prefix.
//! - Warnings never carry raw line contents (see warning.rs).

use std::io::ErrorKind;
use std::path::Path;

use super::warning::LoadWarning;

/// Parse the `.env` file at `path`.
///
/// Returns `Ok(None)` when the file does not exist, `Ok(Some(pairs))` on
/// success, and `Err(warning)` when the file exists but cannot be read or
/// parsed.
pub(crate) fn parse_env_file(path: &Path) -> Result<Option<Vec<(String, String)>>, LoadWarning> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => return Ok(None),
        Err(e) => return Err(warning_for(path, e)),
    };

    let mut pairs = Vec::new();
    for item in iter {
        match item {
            Ok(pair) => pairs.push(pair),
            Err(e) => return Err(warning_for(path, e)),
        }
    }
    Ok(Some(pairs))
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound
    )
}

/// Map a dotenv error to a warning, dropping any line contents it carries.
fn warning_for(path: &Path, err: dotenvy::Error) -> LoadWarning {
    match err {
        dotenvy::Error::LineParse(_, error_index) => LoadWarning::Parse {
            path: path.to_path_buf(),
            error_index,
        },
        dotenvy::Error::Io(io_err) => LoadWarning::Io {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => LoadWarning::Unknown {
            path: path.to_path_buf(),
        },
    }
}
