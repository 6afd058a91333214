//! Key/value env file reader.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` text files into an [`EnvFile`] store.
//! - Skip comment lines and anything that does not have the exact entry shape.
//!
//! Does NOT handle:
//! - Quoting, escaping, `export` prefixes or multi-line values.
//! - Mutating the process environment (values stay in the returned store).
//!
//! Invariants:
//! - A missing or unreadable file yields an empty store, never an error.
//! - Lines are trimmed, then must match the entry pattern as a whole; malformed
//!   lines are dropped, never partially parsed.
//! - Keys and values are stored verbatim and split on the first `=`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::COMMENT_PREFIX;

/// A key made of ASCII word characters, `=`, then a value that starts with a
/// word character and contains no whitespace or further `=`.
static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+=[A-Za-z0-9_][^\s=]*$").expect("entry pattern is valid")
});

/// Key/value pairs read from an env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: HashMap<String, String>,
}

impl EnvFile {
    /// Load an env file from `path`.
    ///
    /// Returns an empty store if the file cannot be opened. Lines that are not
    /// valid UTF-8 are skipped like any other malformed line. An I/O error
    /// mid-read ends the read; entries seen up to that point are kept.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %path.display(), kind = ?e.kind(), "env file not loaded");
                return Self::default();
            }
        };

        let mut store = Self::default();
        let mut skipped = 0usize;
        for line in BufReader::new(file).split(b'\n') {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(path = %path.display(), kind = ?e.kind(), "stopped reading env file");
                    break;
                }
            };
            match std::str::from_utf8(&line) {
                Ok(line) => store.push_line(line),
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!(path = %path.display(), skipped, "skipped non-utf8 env file lines");
        }

        tracing::debug!(path = %path.display(), entries = store.len(), "loaded env file");
        store
    }

    /// Parse env file contents already held in memory.
    pub fn parse(contents: &str) -> Self {
        let mut store = Self::default();
        for line in contents.lines() {
            store.push_line(line);
        }
        store
    }

    fn push_line(&mut self, line: &str) {
        if let Some((key, value)) = parse_line(line) {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the store, returning the underlying map.
    pub fn into_map(self) -> HashMap<String, String> {
        self.entries
    }
}

impl IntoIterator for EnvFile {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Split a single env file line into `(key, value)`.
///
/// Returns `None` for blank lines, comments, and lines that do not match the
/// entry pattern.
pub(crate) fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }
    if !ENTRY_LINE.is_match(line) {
        return None;
    }
    line.split_once('=')
}

/// Load an env file into a plain map.
///
/// Missing files produce an empty map.
pub fn load_env_file(path: impl AsRef<Path>) -> HashMap<String, String> {
    EnvFile::load(path).into_map()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_line_accepts_simple_entry() {
        assert_eq!(parse_line("FOO=bar"), Some(("FOO", "bar")));
        assert_eq!(parse_line("  USERNAME=guest  "), Some(("USERNAME", "guest")));
    }

    #[test]
    fn test_parse_line_keeps_punctuation_after_first_word_char() {
        assert_eq!(parse_line("TOKEN=abc$@H9876;"), Some(("TOKEN", "abc$@H9876;")));
        assert_eq!(parse_line("Hello=World!"), Some(("Hello", "World!")));
    }

    #[test]
    fn test_parse_line_skips_comments_and_blanks() {
        assert_eq!(parse_line("# FOO=bar"), None);
        assert_eq!(parse_line("   #FOO=bar"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("    "), None);
    }

    #[test]
    fn test_parse_line_rejects_malformed_entries() {
        for line in [
            "FOO = bar",
            "FOO=bar baz",
            "FOO=bar=baz",
            "FOO==bar",
            "=bar",
            "FOO=",
            "FOO",
            "FOO-BAR=baz",
            "export FOO=bar",
            "FOO=\"bar\"",
        ] {
            assert_eq!(parse_line(line), None, "line {line:?} should be skipped");
        }
    }

    #[test]
    fn test_parse_builds_store() {
        let store = EnvFile::parse("FOO=bar\n# comment\nBAD LINE\nUSERNAME=guest\n");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("FOO"), Some("bar"));
        assert_eq!(store.get("USERNAME"), Some("guest"));
        assert_eq!(store.get("BAD"), None);
    }

    #[test]
    fn test_later_duplicate_key_wins() {
        let store = EnvFile::parse("FOO=first\nFOO=second\n");
        assert_eq!(store.get("FOO"), Some("second"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = EnvFile::load(temp_dir.path().join("does-not-exist.env"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "FOO=bar\nUSERNAME=guest\nTOKEN=abc$@H9876;\nHello=World!\n").unwrap();

        let store = load_env_file(&path);
        assert_eq!(store.len(), 4);
        assert_eq!(store["FOO"], "bar");
        assert_eq!(store["USERNAME"], "guest");
        assert_eq!(store["TOKEN"], "abc$@H9876;");
        assert_eq!(store["Hello"], "World!");
    }

    #[test]
    fn test_load_skips_non_utf8_line_and_keeps_reading() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, b"FOO=bar\nBAD=\xff\xfe\nAFTER=value\n").unwrap();

        let store = EnvFile::load(&path);
        assert_eq!(store.get("FOO"), Some("bar"));
        assert_eq!(store.get("BAD"), None);
        assert_eq!(store.get("AFTER"), Some("value"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_handles_crlf_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "FOO=bar\r\nAFTER=value\r\n").unwrap();

        let store = EnvFile::load(&path);
        assert_eq!(store.get("FOO"), Some("bar"));
        assert_eq!(store.get("AFTER"), Some("value"));
    }

    #[test]
    fn test_load_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = EnvFile::load(temp_dir.path());
        assert!(store.is_empty());
    }
}
