//! The record kept for each resolved variable.

use std::any::{Any, type_name};
use std::fmt;

use crate::constants::DEFAULT_MARKER;
use crate::error::{EnvError, Result};

/// One resolved configuration value.
///
/// Entries are created by [`DotEnvironment::variable`](crate::DotEnvironment::variable)
/// and never change afterwards. The value is stored type-erased and read back
/// with [`Entry::value`].
pub struct Entry {
    key: String,
    raw_key: String,
    cast: &'static str,
    value_type: &'static str,
    value: Box<dyn Any + Send + Sync>,
    rendered: String,
    is_default: bool,
}

impl Entry {
    pub(crate) fn new<T>(
        key: String,
        raw_key: &str,
        cast: &'static str,
        value: T,
        is_default: bool,
    ) -> Self
    where
        T: Any + fmt::Debug + Send + Sync,
    {
        Self {
            rendered: format!("{value:?}"),
            key,
            raw_key: raw_key.to_string(),
            cast,
            value_type: type_name::<T>(),
            value: Box::new(value),
            is_default,
        }
    }

    /// Fully-qualified (prefixed) variable name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Variable name as it was requested, without the prefix.
    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }

    /// Label of the cast that produced the value.
    pub fn cast(&self) -> &'static str {
        self.cast
    }

    /// Whether the fallback was used because the variable was unset.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// `Debug` rendering of the value, captured when the entry was created.
    pub fn rendered_value(&self) -> &str {
        &self.rendered
    }

    /// The value, if it was stored as a `T`.
    pub fn value<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub(crate) fn typed_value<T: Any>(&self) -> Result<&T> {
        self.value::<T>().ok_or_else(|| EnvError::TypeMismatch {
            key: self.key.clone(),
            expected: type_name::<T>(),
            actual: self.value_type,
        })
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("raw_key", &self.raw_key)
            .field("cast", &self.cast)
            .field("value", &format_args!("{}", self.rendered))
            .field("is_default", &self.is_default)
            .finish()
    }
}

/// Renders as `<KEY[type]= value>`, with ` (default)` appended for fallbacks.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_default { DEFAULT_MARKER } else { "" };
        write!(f, "<{}[{}]= {}{}>", self.key, self.cast, self.rendered, marker)
    }
}
