//! Read-only sources of environment values.
//!
//! Responsibilities:
//! - Define the [`EnvSource`] seam the loader reads variables through.
//! - Provide [`ProcessEnv`] for the real process environment and map-backed
//!   sources for deterministic tests.
//!
//! Does NOT handle:
//! - Writing variables. No source in this crate mutates the process environment.
//!
//! Invariants:
//! - Empty values are reported as unset.
//! - Non-empty values are returned verbatim, surrounding whitespace included.

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

/// A read-only lookup of environment variables.
pub trait EnvSource {
    /// Raw lookup. Implementors return whatever they hold, empty or not.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `None` if unset or empty.
    fn var(&self, key: &str) -> Option<String> {
        self.lookup(key).filter(|v| !v.is_empty())
    }
}

/// The current process environment.
///
/// A variable that is set but not valid Unicode is reported as unset and
/// logged at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(var = key, "ignoring environment variable that is not valid unicode");
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
