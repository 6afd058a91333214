//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` that selects the env file and the
//!   environment source.
//! - Collect resolved values for a record type.
//! - Assign resolved values into a record's string fields.
//!
//! Does NOT handle:
//! - Precedence rules (delegated to resolve.rs).
//! - Env file parsing (see `env_file`).
//!
//! Invariants / Assumptions:
//! - An explicit env file set on the loader overrides the record's own location.
//! - `GREENENV_FILE_DISABLED` is read through the configured source and, when
//!   `1` or `true`, skips the env file entirely.
//! - `apply` resolves every field before writing any of them, so a failed
//!   resolution leaves the record untouched.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::resolve::resolve_tags;
use super::target::Target;
use crate::constants::FILE_DISABLED_VAR;
use crate::env_file::EnvFile;
use crate::field::{Environment, Field};
use crate::paths::default_env_file_path;
use crate::resolved::ResolvedConfig;
use crate::source::{EnvSource, ProcessEnv};
use crate::tag::FieldTag;

/// Loader that resolves annotated records from an env file and an environment source.
#[derive(Debug, Clone)]
pub struct EnvLoader<S = ProcessEnv> {
    source: S,
    env_file: Option<PathBuf>,
}

impl Default for EnvLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader<ProcessEnv> {
    /// Create a loader reading the process environment with no env file override.
    pub fn new() -> Self {
        Self {
            source: ProcessEnv,
            env_file: None,
        }
    }
}

impl<S: EnvSource> EnvLoader<S> {
    /// Read variables from `source` instead of the process environment.
    pub fn with_source<T: EnvSource>(self, source: T) -> EnvLoader<T> {
        EnvLoader {
            source,
            env_file: self.env_file,
        }
    }

    /// Read the env file at `path`, overriding any record-provided location.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Read `.env` from the current working directory.
    pub fn with_default_env_file(self) -> Self {
        self.with_env_file(default_env_file_path())
    }

    /// The explicit env file, if one was set.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Check if env file loading is disabled via `GREENENV_FILE_DISABLED`.
    fn file_disabled(&self) -> bool {
        matches!(
            self.source.var(FILE_DISABLED_VAR).as_deref(),
            Some("true") | Some("1")
        )
    }

    fn load_file(&self, path: Option<&Path>) -> EnvFile {
        match path {
            Some(_) if self.file_disabled() => {
                tracing::debug!(var = FILE_DISABLED_VAR, "env file loading disabled");
                EnvFile::default()
            }
            Some(path) => EnvFile::load(path),
            None => EnvFile::default(),
        }
    }

    fn resolve<T: Environment>(
        &self,
        fields: &[Field<T>],
        path: Option<&Path>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let tags: Vec<FieldTag> = fields.iter().map(Field::tag).collect();
        resolve_tags(&tags, self.load_file(path), &self.source)
    }

    /// Resolve the fields of `T` using only the loader's explicit env file.
    pub fn collect<T: Environment>(&self) -> Result<ResolvedConfig, ConfigError> {
        self.resolve(&T::fields(), self.env_file())
    }

    /// Resolve the fields of `record`'s type, reading the env file the record
    /// points at unless the loader overrides it.
    pub fn collect_for<T: Environment>(&self, record: &T) -> Result<ResolvedConfig, ConfigError> {
        let path = self.file_for(record);
        self.resolve(&T::fields(), path.as_deref())
    }

    fn file_for<T: Environment>(&self, record: &T) -> Option<PathBuf> {
        self.env_file
            .clone()
            .or_else(|| record.env_file_location())
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Resolve and assign every annotated `String` field of `record`.
    ///
    /// Fields of other types are resolved but left untouched. On error no
    /// field has been written.
    pub fn apply<T: Environment>(&self, record: &mut T) -> Result<(), ConfigError> {
        let fields = T::fields();
        let path = self.file_for(record);
        let resolved = self.resolve(&fields, path.as_deref())?;

        let mut assigned = 0usize;
        for field in &fields {
            let tag = field.tag();
            if !tag.is_managed() {
                continue;
            }
            let Some(slot) = field.text_mut(record) else {
                tracing::debug!(field = field.name(), var = %tag.var_name, "skipping non-string field");
                continue;
            };
            if let Some(value) = resolved.get(&tag.var_name) {
                *slot = value.to_string();
                assigned += 1;
            }
        }

        tracing::debug!(assigned, fields = fields.len(), "applied configuration");
        Ok(())
    }

    /// Like [`apply`](Self::apply), but accepts any [`Target`]. Anything other
    /// than a mutable borrow fails with `ConfigError::InvalidTarget`.
    pub fn apply_target<'a, T, R>(&self, target: R) -> Result<(), ConfigError>
    where
        T: Environment + 'a,
        R: Into<Target<'a, T>>,
    {
        match target.into() {
            Target::Mut(record) => self.apply(record),
            other => Err(ConfigError::InvalidTarget(other.describe())),
        }
    }
}
