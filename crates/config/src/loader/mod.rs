//! Configuration loader for `.env` files and the process environment.
//!
//! Responsibilities:
//! - Merge the base `.env` file, the `.env.<name>` override file, and the
//!   process environment, in that precedence order (later wins).
//! - Provide a builder-pattern `ConfigLoader` with overrides for the project
//!   root, the environment name, and the process-env snapshot.
//! - Surface parse/read problems as returned warnings mirrored to `tracing`.
//!
//! Does NOT handle:
//! - Validation of configuration values (the mapping is returned as-is).
//! - Writing back to the process environment or to disk.
//!
//! Invariants / Assumptions:
//! - `load()` cannot fail; missing files are skipped, broken files warn and
//!   contribute nothing.
//! - Process environment values win over file values, even when empty.
//! - Warning text never includes `.env` line contents.

mod builder;
mod env;
mod parse;
mod warning;

pub use builder::{ConfigLoader, load};
pub use warning::LoadWarning;

#[cfg(test)]
mod tests;
