//! Result of a resolution pass.
//!
//! Responsibilities:
//! - Hold resolved variable values keyed by variable name.
//! - Record which layer each value came from.
//!
//! Invariants:
//! - Keys are unique; a later insert for the same key replaces the earlier one.
//! - Serializes as a flat `{ "VAR": "value" }` map; provenance is not serialized.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Layer a resolved value was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// The environment source.
    Environment,
    /// The `default=` modifier of the field annotation.
    Default,
    /// The env file.
    File,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueSource::Environment => "environment",
            ValueSource::Default => "default",
            ValueSource::File => "file",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: String,
    source: ValueSource,
}

/// Resolved configuration values keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    entries: BTreeMap<String, Entry>,
}

impl ResolvedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: String, value: String, source: ValueSource) {
        self.entries.insert(key, Entry { value, source });
    }

    /// Resolved value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    /// Layer the value of `key` came from.
    pub fn source_of(&self, key: &str) -> Option<ValueSource> {
        self.entries.get(key).map(|e| e.source)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.value.as_str()))
    }

    /// Drop provenance and return the plain key/value map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
            .into_iter()
            .map(|(k, e)| (k, e.value))
            .collect()
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
