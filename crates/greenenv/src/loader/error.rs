//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for resolution and assignment failures.
//!
//! Does NOT handle:
//! - Env file read failures. A missing or unreadable file is not an error.
//!
//! Invariants:
//! - Every variant names what failed (variable name or target description).
//! - Error messages NEVER include resolved values, which may be secrets.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field marked `required` had no value in the environment.
    #[error("{0} not found in environment")]
    RequiredMissing(String),

    /// `apply_target` was not given a mutable handle to a record.
    #[error("must provide mutable reference to record but given {0}")]
    InvalidTarget(String),
}
