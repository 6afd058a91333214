//! Layered value resolution.
//!
//! Responsibilities:
//! - Merge env file entries, annotation defaults, and environment values into
//!   a [`ResolvedConfig`].
//! - Enforce `required` annotations.
//!
//! Does NOT handle:
//! - Loading the env file (see `env_file`).
//! - Writing values into a record (see `builder`).
//!
//! Invariants:
//! - Precedence per field: environment > annotation default > env file.
//! - Env file entries that no field claims are kept as-is.
//! - Fields are processed in the order given; the first required field with no
//!   environment value aborts resolution.

use super::error::ConfigError;
use crate::env_file::EnvFile;
use crate::resolved::{ResolvedConfig, ValueSource};
use crate::source::EnvSource;
use crate::tag::FieldTag;

/// Resolve every managed tag against `file` and `source`.
pub(crate) fn resolve_tags<S: EnvSource + ?Sized>(
    tags: &[FieldTag],
    file: EnvFile,
    source: &S,
) -> Result<ResolvedConfig, ConfigError> {
    let mut resolved = ResolvedConfig::new();
    for (key, value) in file {
        resolved.insert(key, value, ValueSource::File);
    }

    for tag in tags.iter().filter(|t| t.is_managed()) {
        if let Some(value) = source.var(&tag.var_name) {
            tracing::trace!(var = %tag.var_name, source = %ValueSource::Environment, "resolved");
            resolved.insert(tag.var_name.clone(), value, ValueSource::Environment);
            continue;
        }

        if tag.required {
            tracing::debug!(var = %tag.var_name, field = %tag.field_name, "required variable missing");
            return Err(ConfigError::RequiredMissing(tag.var_name.clone()));
        }

        if let Some(default) = &tag.default {
            tracing::trace!(var = %tag.var_name, source = %ValueSource::Default, "resolved");
            resolved.insert(tag.var_name.clone(), default.clone(), ValueSource::Default);
        } else if resolved.contains_key(&tag.var_name) {
            tracing::trace!(var = %tag.var_name, source = %ValueSource::File, "resolved");
        } else {
            tracing::trace!(var = %tag.var_name, "no value");
        }
    }

    Ok(resolved)
}
