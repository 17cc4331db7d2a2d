//! The resolver and container for environment-backed variables.
//!
//! Responsibilities:
//! - Resolve `prefix + name` against an [`EnvSource`], cast the raw value,
//!   and apply the fallback policy when the variable is unset.
//! - Record every resolved variable as an [`Entry`], in first-request order.
//! - Provide read-only access by bare name or by prefixed key.
//!
//! Does NOT handle:
//! - Loading `.env` files (see `dotenv.rs`).
//! - Writing to the environment. Sources are only ever read.
//!
//! Invariants:
//! - A failed resolution records nothing and leaves existing entries untouched.
//! - Re-declaring a key replaces its entry in place, keeping its position.
//! - Fallback values are stored verbatim; only raw environment strings are cast.
//! - Lookups try the key verbatim first, then with the prefix prepended.

mod entry;
mod fallback;
mod render;

#[cfg(test)]
mod tests;

pub use entry::Entry;
pub use fallback::Fallback;

use std::any::Any;
use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::cast::Cast;
use crate::error::{EnvError, Result};
use crate::source::{EnvSource, ProcessEnv};

/// Declares, casts, and records environment variables under an optional prefix.
///
/// ```
/// use dotenvironment::{DotEnvironment, Fallback, MapSource, cast};
///
/// let source = MapSource::new().with("ONNYMM_DB_USER", "root");
/// let mut env = DotEnvironment::with_source("ONNYMM_", source)?;
///
/// let user: String = env.required("DB_USER", cast::string)?;
/// let port: u16 = env.variable("DB_PORT", cast::parse::<u16>(), Fallback::Value(5432))?;
///
/// assert_eq!(user, "root");
/// assert_eq!(port, 5432);
/// assert_eq!(env.get::<u16>("ONNYMM_DB_PORT")?, &5432);
/// assert!(env.contains("DB_USER"));
/// # Ok::<(), dotenvironment::EnvError>(())
/// ```
pub struct DotEnvironment<S = ProcessEnv> {
    prefix: String,
    source: S,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Default for DotEnvironment<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl DotEnvironment<ProcessEnv> {
    /// Create a resolver over the process environment, without a prefix.
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            source: ProcessEnv,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a resolver over the process environment with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::PrefixNotUppercase` if `prefix` contains lowercase letters.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self> {
        Self::with_source(prefix, ProcessEnv)
    }
}

impl<S: EnvSource> DotEnvironment<S> {
    /// Create a resolver reading from `source` with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::PrefixNotUppercase` if `prefix` contains lowercase letters.
    pub fn with_source(prefix: impl Into<String>, source: S) -> Result<Self> {
        let prefix = prefix.into();
        if prefix != prefix.to_uppercase() {
            return Err(EnvError::PrefixNotUppercase { prefix });
        }

        Ok(Self {
            prefix,
            source,
            entries: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Declare a variable, resolve it, record it, and return its value.
    ///
    /// The environment is consulted for `prefix + name`. A present value is
    /// passed through `cast`; an absent one falls back according to
    /// `fallback`, without casting.
    ///
    /// The value is cloned into the record. Cast into `Arc<T>` when `T`
    /// itself cannot be cloned.
    ///
    /// # Errors
    ///
    /// - `EnvError::EmptyName` / `EnvError::NameNotUppercase` for invalid names.
    /// - `EnvError::CastFailure` if `cast` rejects the raw value.
    /// - `EnvError::MissingRequiredVariable` if the variable is unset and
    ///   `fallback` is [`Fallback::Required`].
    ///
    /// Nothing is recorded when an error is returned.
    pub fn variable<T, C>(&mut self, name: &str, cast: C, fallback: Fallback<'_, T>) -> Result<T>
    where
        T: Any + Clone + Debug + Send + Sync,
        C: Cast<T>,
    {
        validate_name(name)?;
        let key = self.full_key(name);

        let (value, is_default) = match self.source.var(&key) {
            Some(raw) => match cast.cast(&raw) {
                Ok(value) => (value, false),
                Err(source) => return Err(EnvError::CastFailure { key, raw, source }),
            },
            None => match fallback.resolve() {
                Some(value) => (value, true),
                None => return Err(EnvError::MissingRequiredVariable { key }),
            },
        };

        tracing::debug!(key = %key, is_default, "Resolved environment variable");

        let entry = Entry::new(key, name, cast.type_label(), value.clone(), is_default);
        self.record(entry);

        Ok(value)
    }

    /// Declare a variable that must be set.
    pub fn required<T, C>(&mut self, name: &str, cast: C) -> Result<T>
    where
        T: Any + Clone + Debug + Send + Sync,
        C: Cast<T>,
    {
        self.variable(name, cast, Fallback::Required)
    }

    /// Declare a variable with a default used verbatim when it is unset.
    pub fn variable_or<T, C>(&mut self, name: &str, cast: C, default: T) -> Result<T>
    where
        T: Any + Clone + Debug + Send + Sync,
        C: Cast<T>,
    {
        self.variable(name, cast, Fallback::Value(default))
    }

    /// Declare a variable whose default is computed only when it is unset.
    pub fn variable_or_else<T, C, F>(&mut self, name: &str, cast: C, default: F) -> Result<T>
    where
        T: Any + Clone + Debug + Send + Sync,
        C: Cast<T>,
        F: FnOnce() -> T,
    {
        self.variable(name, cast, Fallback::lazy(default))
    }

    /// The source variables are read from.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> DotEnvironment<S> {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Value of a resolved variable, by bare name or prefixed key.
    ///
    /// # Errors
    ///
    /// - `EnvError::KeyNotFound` if neither form has been resolved.
    /// - `EnvError::TypeMismatch` if the value was not stored as a `T`.
    pub fn get<T: Any>(&self, key: &str) -> Result<&T> {
        self.entry(key)?.typed_value::<T>()
    }

    /// Entry of a resolved variable, by bare name or prefixed key.
    pub fn entry(&self, key: &str) -> Result<&Entry> {
        self.lookup(key).ok_or_else(|| EnvError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Whether a variable has been resolved, by bare name or prefixed key.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved entries, in the order they were first requested.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Fully-qualified keys, in the order they were first requested.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::key)
    }

    fn full_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn lookup(&self, key: &str) -> Option<&Entry> {
        let position = match self.index.get(key) {
            Some(position) => *position,
            None => *self.index.get(&self.full_key(key))?,
        };
        self.entries.get(position)
    }

    fn record(&mut self, entry: Entry) {
        match self.index.get(entry.key()) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.key().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

/// Lists the prefix and the recorded entries only. The source is left out so
/// raw values that were never requested, or were cast into secrets, stay hidden.
impl<S> Debug for DotEnvironment<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotEnvironment")
            .field("prefix", &self.prefix)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl<'a, S> IntoIterator for &'a DotEnvironment<S> {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EnvError::EmptyName);
    }
    if name != name.to_uppercase() {
        return Err(EnvError::NameNotUppercase {
            name: name.to_string(),
        });
    }
    Ok(())
}
