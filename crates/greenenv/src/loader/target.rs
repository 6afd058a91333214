//! Assignment targets accepted by `EnvLoader::apply_target`.
//!
//! Only a mutable borrow can receive values. Shared borrows and owned values
//! are accepted by the type so that callers wiring records through generic
//! code get an `InvalidTarget` error instead of a compile-time dead end.

use std::any::type_name;

/// A record handed to the loader for assignment.
#[derive(Debug)]
pub enum Target<'a, T> {
    /// A writable record.
    Mut(&'a mut T),
    /// A shared borrow. Cannot be written.
    Shared(&'a T),
    /// A value moved into the loader. Writes would be lost.
    Owned(T),
}

impl<'a, T> Target<'a, T> {
    pub fn owned(value: T) -> Self {
        Target::Owned(value)
    }

    /// Human-readable description of what was provided.
    pub fn describe(&self) -> String {
        match self {
            Target::Mut(_) => format!("&mut {}", type_name::<T>()),
            Target::Shared(_) => format!("&{}", type_name::<T>()),
            Target::Owned(_) => type_name::<T>().to_string(),
        }
    }
}

impl<'a, T> From<&'a mut T> for Target<'a, T> {
    fn from(record: &'a mut T) -> Self {
        Target::Mut(record)
    }
}

impl<'a, T> From<&'a T> for Target<'a, T> {
    fn from(record: &'a T) -> Self {
        Target::Shared(record)
    }
}
