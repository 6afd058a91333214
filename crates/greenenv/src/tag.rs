//! Field annotation parser.
//!
//! Responsibilities:
//! - Parse annotations of the form `<VARNAME>[,required][,default=<token>]`.
//! - Produce an immutable [`FieldTag`] describing how a field is resolved.
//!
//! Does NOT handle:
//! - Looking values up (see `loader`).
//! - Validating that the variable name is a legal environment variable name.
//!
//! Invariants:
//! - An empty annotation yields an unmanaged tag (empty variable name).
//! - The variable name is always the first comma-separated segment.
//! - `required` must appear as its own segment; substrings do not count.
//! - Default tokens are limited to ASCII word characters and `!@#$%^&*()`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::constants::{REQUIRED_FLAG, TAG_SEPARATOR};

static DEFAULT_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*default=(?P<default>[A-Za-z0-9_!@#$%^&*()]+)")
        .expect("default pattern is valid")
});

/// Parsed form of a field annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldTag {
    /// Name of the field in the record this tag belongs to.
    pub field_name: String,
    /// Key used for environment and env file lookups.
    pub var_name: String,
    /// Whether the environment must supply a value.
    pub required: bool,
    /// Fallback used when the environment has no value.
    pub default: Option<String>,
}

impl FieldTag {
    /// Parse an annotation that is not yet bound to a field.
    pub fn parse(annotation: &str) -> Self {
        Self::for_field("", annotation)
    }

    /// Parse the annotation attached to `field_name`.
    pub fn for_field(field_name: &str, annotation: &str) -> Self {
        let annotation = annotation.trim();
        if annotation.is_empty() {
            return Self::default();
        }

        let mut segments = annotation.split(TAG_SEPARATOR);
        let var_name = segments.next().unwrap_or_default().trim().to_string();
        let required = segments.any(|segment| segment.trim() == REQUIRED_FLAG);
        let default = DEFAULT_VALUE
            .captures(annotation)
            .and_then(|caps| caps.name("default"))
            .map(|m| m.as_str().to_string());

        Self {
            field_name: field_name.to_string(),
            var_name,
            required,
            default,
        }
    }

    /// Whether this tag names a variable at all.
    pub fn is_managed(&self) -> bool {
        !self.var_name.is_empty()
    }

    /// The declared default, or an empty string when there is none.
    pub fn default_value(&self) -> &str {
        self.default.as_deref().unwrap_or_default()
    }
}
