//! Field registration for records populated by the loader.
//!
//! Responsibilities:
//! - Define the [`Environment`] trait a record implements to describe its shape.
//! - Describe each field with its name, annotation, and storage capability.
//!
//! Does NOT handle:
//! - Parsing annotations (see `tag`).
//! - Resolving or assigning values (see `loader`).
//!
//! Invariants:
//! - `Environment::fields` returns fields in a stable, declaration order; the
//!   loader processes them in that order.
//! - Only `FieldKind::Text` fields are ever written. Other fields are visible to
//!   resolution but never assigned.

use std::fmt;
use std::path::PathBuf;

use crate::tag::FieldTag;

/// Accessor returning the string storage of a field.
pub type TextAccessor<T> = fn(&mut T) -> &mut String;

/// How a field stores its value.
pub enum FieldKind<T> {
    /// A `String` field, writable through the accessor.
    Text(TextAccessor<T>),
    /// Any other type. The loader resolves it but never writes it.
    Other,
}

impl<T> Clone for FieldKind<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldKind<T> {}

impl<T> fmt::Debug for FieldKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text(_) => f.write_str("Text"),
            FieldKind::Other => f.write_str("Other"),
        }
    }
}

/// One entry in a record's field table.
pub struct Field<T> {
    name: &'static str,
    annotation: &'static str,
    kind: FieldKind<T>,
}

impl<T> Field<T> {
    /// A `String` field with its annotation and accessor.
    ///
    /// ```
    /// use greenenv::Field;
    ///
    /// struct AppEnv {
    ///     database: String,
    /// }
    ///
    /// let field: Field<AppEnv> = Field::text("database", "DATABASE,default=main", |e| &mut e.database);
    /// assert!(field.is_text());
    /// ```
    pub const fn text(name: &'static str, annotation: &'static str, get: TextAccessor<T>) -> Self {
        Self {
            name,
            annotation,
            kind: FieldKind::Text(get),
        }
    }

    /// A field whose type the loader does not write (numbers, flags, ...).
    pub const fn other(name: &'static str, annotation: &'static str) -> Self {
        Self {
            name,
            annotation,
            kind: FieldKind::Other,
        }
    }

    /// A field without an annotation.
    pub const fn unmanaged(name: &'static str) -> Self {
        Self::other(name, "")
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn annotation(&self) -> &'static str {
        self.annotation
    }

    pub fn kind(&self) -> FieldKind<T> {
        self.kind
    }

    /// Whether the field stores a `String`.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text(_))
    }

    /// Parse this field's annotation.
    pub fn tag(&self) -> FieldTag {
        FieldTag::for_field(self.name, self.annotation)
    }

    /// Borrow the string storage of this field on `record`, if it has any.
    pub fn text_mut<'a>(&self, record: &'a mut T) -> Option<&'a mut String> {
        match self.kind {
            FieldKind::Text(get) => Some(get(record)),
            FieldKind::Other => None,
        }
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A record whose fields are populated from the environment.
///
/// ```
/// use greenenv::{Environment, Field};
///
/// #[derive(Default)]
/// struct AppEnv {
///     hostname: String,
///     port: u16,
/// }
///
/// impl Environment for AppEnv {
///     fn fields() -> Vec<Field<Self>> {
///         vec![
///             Field::text("hostname", "APP_HOSTNAME,required", |e| &mut e.hostname),
///             Field::other("port", "APP_PORT"),
///         ]
///     }
/// }
/// ```
pub trait Environment {
    /// The record's fields, in declaration order.
    fn fields() -> Vec<Field<Self>>
    where
        Self: Sized;

    /// Location of the env file backing this record, if any.
    fn env_file_location(&self) -> Option<PathBuf> {
        None
    }
}

/// Parsed tags for every annotated field of `T`, in declaration order.
pub fn field_tags<T: Environment>() -> Vec<FieldTag> {
    T::fields()
        .iter()
        .map(Field::tag)
        .filter(FieldTag::is_managed)
        .collect()
}
