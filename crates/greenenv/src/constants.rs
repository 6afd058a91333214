//! Centralized constants for the greenenv crate.
//!
//! This module contains the grammar tokens and default locations shared by
//! the tag parser, the env file reader, and the loader.

// =============================================================================
// Annotation Grammar
// =============================================================================

/// Separator between the variable name and its modifiers in an annotation.
pub const TAG_SEPARATOR: char = ',';

/// Bare modifier marking a field as required.
pub const REQUIRED_FLAG: &str = "required";

// =============================================================================
// Env File
// =============================================================================

/// Prefix marking a comment line in an env file.
pub const COMMENT_PREFIX: char = '#';

/// File name used when resolving the default env file location.
pub const DEFAULT_ENV_FILE_NAME: &str = ".env";

/// File name used inside the platform config directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.env";

/// Environment variable that disables env file loading when set to `1` or `true`.
pub const FILE_DISABLED_VAR: &str = "GREENENV_FILE_DISABLED";
