//! Typed configuration from env files and environment variables.
//!
//! A record describes its fields with short annotations of the form
//! `<VARNAME>[,required][,default=<value>]`. The loader reads an optional
//! `KEY=VALUE` env file, overlays defaults and environment variables, and
//! writes the results into the record's `String` fields.
//!
//! ```no_run
//! use greenenv::{Environment, Field, unmarshal_env};
//! use std::path::PathBuf;
//!
//! #[derive(Default)]
//! struct AppEnv {
//!     token: String,
//!     username: String,
//!     hostname: String,
//! }
//!
//! impl Environment for AppEnv {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::text("token", "TOKEN,default=abcdef1234!", |e| &mut e.token),
//!             Field::text("username", "USERNAME,default=guestDefault", |e| &mut e.username),
//!             Field::text("hostname", "APP_HOSTNAME,required", |e| &mut e.hostname),
//!         ]
//!     }
//!
//!     fn env_file_location(&self) -> Option<PathBuf> {
//!         Some(PathBuf::from(".env"))
//!     }
//! }
//!
//! let mut env = AppEnv::default();
//! unmarshal_env(&mut env)?;
//! # Ok::<(), greenenv::ConfigError>(())
//! ```

pub mod constants;
pub mod env_file;
pub mod field;
mod loader;
pub mod paths;
pub mod resolved;
pub mod source;
pub mod tag;

pub use env_file::{EnvFile, load_env_file};
pub use field::{Environment, Field, FieldKind, field_tags};
pub use loader::{ConfigError, EnvLoader, Target, collect, load_env, unmarshal_env};
pub use resolved::{ResolvedConfig, ValueSource};
pub use source::{EnvSource, ProcessEnv};
pub use tag::FieldTag;
