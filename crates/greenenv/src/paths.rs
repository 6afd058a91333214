//! Path helpers for env file locations.
//!
//! Responsibilities:
//! - Provide the conventional `.env` location in the working directory.
//! - Provide a per-application location under the platform config directory,
//!   using the `directories` crate.
//!
//! Does NOT handle:
//! - File I/O. Paths are returned whether or not the file exists.

use std::path::PathBuf;

use crate::constants::{DEFAULT_CONFIG_FILE_NAME, DEFAULT_ENV_FILE_NAME};

/// Returns `.env` relative to the current working directory.
pub fn default_env_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_ENV_FILE_NAME)
}

/// Returns the per-application env file path:
/// - Linux: `~/.config/<app>/config.env`
/// - macOS: `~/Library/Application Support/<app>/config.env`
/// - Windows: `%AppData%\<app>\config\config.env`
///
/// Returns `None` when no home directory can be determined.
pub fn project_env_file_path(app_name: &str) -> Option<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", app_name)?;
    Some(proj_dirs.config_dir().join(DEFAULT_CONFIG_FILE_NAME))
}
