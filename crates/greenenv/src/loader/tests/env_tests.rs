//! Tests against the real process environment.
//!
//! Responsibilities:
//! - Test the free functions (`collect`, `load_env`, `unmarshal_env`).
//! - Test that empty process variables are treated as unset.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use super::{AppEnv, RequiredEnv, env_lock};
use crate::loader::error::ConfigError;
use crate::loader::{collect, load_env, unmarshal_env};

#[test]
#[serial]
fn test_load_env_reads_process_environment() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("DATABASE", Some("processdb")),
            ("EMPTY_VAL", None::<&str>),
            ("SPECIAL_CHARS", None),
        ],
        || {
            let resolved = load_env(&AppEnv::default()).unwrap();
            assert_eq!(resolved.get("DATABASE"), Some("processdb"));
            assert_eq!(resolved.get("EMPTY_VAL"), None);
            assert_eq!(resolved.get("SPECIAL_CHARS"), Some("special!$@#"));
        },
    );
}

#[test]
#[serial]
fn test_empty_process_variable_falls_back_to_default() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("DATABASE", Some(""))], || {
        let resolved = collect::<AppEnv>(None).unwrap();
        assert_eq!(resolved.get("DATABASE"), Some("myuser"));
    });
}

#[test]
#[serial]
fn test_collect_with_env_file_path() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env");
    fs::write(&path, "EMPTY_VAL=fromfile\n").unwrap();

    temp_env::with_vars(
        [
            ("EMPTY_VAL", None::<&str>),
            ("GREENENV_FILE_DISABLED", None),
        ],
        || {
            let resolved = collect::<AppEnv>(Some(&path)).unwrap();
            assert_eq!(resolved.get("EMPTY_VAL"), Some("fromfile"));
        },
    );
}

#[test]
#[serial]
fn test_unmarshal_env_required_missing() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("GREEN_TEST_HOSTNAME", None::<&str>),
            ("GREEN_TEST_PASSWORD", None),
        ],
        || {
            let mut record = RequiredEnv::default();
            let err = unmarshal_env(&mut record).unwrap_err();
            assert_eq!(err, ConfigError::RequiredMissing("GREEN_TEST_HOSTNAME".into()));
        },
    );
}

#[test]
#[serial]
fn test_unmarshal_env_assigns_values() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("GREEN_TEST_HOSTNAME", Some("required_value")),
            ("GREEN_TEST_USERNAME", None),
            ("GREEN_TEST_PASSWORD", Some("pw")),
        ],
        || {
            let mut record = RequiredEnv::default();
            unmarshal_env(&mut record).unwrap();
            assert_eq!(record.hostname, "required_value");
            assert_eq!(record.username, "guest");
            assert_eq!(record.password, "pw");
        },
    );
}
