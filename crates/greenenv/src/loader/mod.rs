//! Configuration loader for env files and environment variables.
//!
//! Responsibilities:
//! - Resolve annotated record fields from an env file, annotation defaults,
//!   and an environment source.
//! - Provide a builder-pattern `EnvLoader` plus free functions that use the
//!   process environment.
//!
//! Does NOT handle:
//! - Converting values to non-string types.
//! - Mutating the process environment.
//!
//! Invariants / Assumptions:
//! - Environment values take precedence over defaults, which take precedence
//!   over env file values.
//! - Missing required variables fail fast with `ConfigError::RequiredMissing`.

mod builder;
mod error;
mod resolve;
mod target;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use builder::EnvLoader;
pub use error::ConfigError;
pub use target::Target;

use crate::field::Environment;
use crate::resolved::ResolvedConfig;

/// Resolve the fields of `T` from the process environment and the env file at
/// `env_file`, if any.
pub fn collect<T: Environment>(env_file: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    match env_file {
        Some(path) => EnvLoader::new().with_env_file(path).collect::<T>(),
        None => EnvLoader::new().collect::<T>(),
    }
}

/// Resolve the fields of `record`'s type from the process environment and the
/// env file named by [`Environment::env_file_location`].
pub fn load_env<T: Environment>(record: &T) -> Result<ResolvedConfig, ConfigError> {
    EnvLoader::new().collect_for(record)
}

/// Assign resolved values into the annotated `String` fields of `record`,
/// reading the process environment and the record's env file.
pub fn unmarshal_env<T: Environment>(record: &mut T) -> Result<(), ConfigError> {
    EnvLoader::new().apply(record)
}
