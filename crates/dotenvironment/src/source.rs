//! Environment sources.
//!
//! Responsibilities:
//! - Abstract "look up a variable by name" behind [`EnvSource`].
//! - Provide the process environment ([`ProcessEnv`]) and an in-memory map
//!   ([`MapSource`]) as sources.
//!
//! Does NOT handle:
//! - `.env` file loading (see `dotenv.rs`), which writes into the process
//!   environment before a [`ProcessEnv`] reads it.
//!
//! Invariants:
//! - Sources are read-only. Nothing in this crate writes through a source.
//! - Values are returned verbatim. An empty string is a present value.

use std::collections::BTreeMap;
use std::env::VarError;
use std::fmt;

/// Read-only lookup of raw environment values.
pub trait EnvSource {
    /// Return the raw value stored under `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(
                    key = %key,
                    "Environment variable is not valid UTF-8, treating as unset"
                );
                None
            }
        }
    }
}

/// An in-memory set of variables.
///
/// Useful for tests and for embedding the resolver where the process
/// environment should not be consulted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    vars: BTreeMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable, returning the source for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Prints the keys only; values may be secrets.
impl fmt::Debug for MapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSource")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EnvSource for MapSource {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
