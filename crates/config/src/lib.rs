//! Layered configuration loading for smart-config.
//!
//! This crate merges a base `.env` file, an optional environment-specific
//! `.env.<name>` file, and the process environment into a single flat
//! mapping. Later tiers win on key collision; the loader never fails.

pub mod constants;
mod loader;
mod types;

pub use loader::{ConfigLoader, LoadWarning, load};
pub use types::LoadedConfig;
