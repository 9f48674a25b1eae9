//! Centralized constants for smart-config.
//!
//! This module contains the well-known file and variable names used by the
//! loader to avoid magic string duplication.

// =============================================================================
// File Names
// =============================================================================

/// Name of the base configuration file, loaded unconditionally.
pub const BASE_ENV_FILE: &str = ".env";

/// Prefix of the environment-specific override file (`.env.<name>`).
pub const ENV_FILE_PREFIX: &str = ".env.";

// =============================================================================
// Environment Variables
// =============================================================================

/// Variable consulted for the current environment name (e.g. "development").
pub const ENV_NAME_VAR: &str = "NODE_ENV";
