//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test resolution precedence through `EnvLoader`.
//! - Test env file selection, the disable gate, and default locations.
//! - Test assignment into records, including invalid targets.
//! - Test the free functions against the real process environment.
//!
//! Invariants:
//! - Tests touching process-global state (env vars, cwd) use `serial_test`
//!   and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::field::{Environment, Field};

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build an in-memory environment source.
pub fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Record used across loader tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppEnv {
    pub database: String,
    pub empty_val: String,
    pub special_chars: String,
    pub some_int: i64,
    pub untagged: String,
    pub location: Option<PathBuf>,
}

impl Environment for AppEnv {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::text("database", "DATABASE,default=myuser", |e| &mut e.database),
            Field::text("empty_val", "EMPTY_VAL", |e| &mut e.empty_val),
            Field::text(
                "special_chars",
                "SPECIAL_CHARS,default=special!$@#",
                |e| &mut e.special_chars,
            ),
            Field::other("some_int", "SOME_INT"),
            Field::unmanaged("untagged"),
        ]
    }

    fn env_file_location(&self) -> Option<PathBuf> {
        self.location.clone()
    }
}

/// Record with required fields placed around an optional one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequiredEnv {
    pub hostname: String,
    pub username: String,
    pub password: String,
}

impl Environment for RequiredEnv {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::text("hostname", "GREEN_TEST_HOSTNAME,required", |e| &mut e.hostname),
            Field::text("username", "GREEN_TEST_USERNAME,default=guest", |e| &mut e.username),
            Field::text("password", "GREEN_TEST_PASSWORD,required", |e| &mut e.password),
        ]
    }
}
