//! What to do when a variable is not set.

use std::fmt;

/// Fallback policy for an unset variable.
///
/// `Required` is a variant of its own, so it can never be confused with a
/// legitimate default such as `None`, `0` or an empty string.
#[derive(Default)]
pub enum Fallback<'a, T> {
    /// The variable must be set.
    #[default]
    Required,
    /// Use this value verbatim. It is not passed through the cast.
    Value(T),
    /// Compute the value, only when the variable is unset.
    Lazy(Box<dyn FnOnce() -> T + 'a>),
}

impl<'a, T> Fallback<'a, T> {
    pub fn lazy(f: impl FnOnce() -> T + 'a) -> Self {
        Fallback::Lazy(Box::new(f))
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Fallback::Required)
    }

    /// Produce the fallback value, or `None` when the variable is required.
    pub(crate) fn resolve(self) -> Option<T> {
        match self {
            Fallback::Required => None,
            Fallback::Value(value) => Some(value),
            Fallback::Lazy(f) => Some(f()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Fallback<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Required => f.write_str("Required"),
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}
