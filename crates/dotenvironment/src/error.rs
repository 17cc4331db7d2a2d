//! Error types for variable resolution and `.env` loading.
//!
//! Responsibilities:
//! - Define error variants for every failure the resolver can report.
//! - Define error variants for `.env` loading failures.
//!
//! Does NOT handle:
//! - Logging. Errors are returned to the caller and never logged here.
//!
//! Invariants:
//! - Every resolution error names the fully-qualified key it concerns.
//! - Error messages never include raw environment values or `.env` line
//!   contents, to prevent secret leakage. `CastFailure` keeps the raw value
//!   as a field for callers that explicitly want it.

use std::io::ErrorKind;
use thiserror::Error;

use crate::cast::CastError;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = EnvError> = std::result::Result<T, E>;

/// Errors that can occur while declaring, reading, or loading variables.
#[derive(Error, Debug)]
pub enum EnvError {
    /// No environment value and no fallback was supplied.
    #[error("Missing required environment variable: {key}")]
    MissingRequiredVariable { key: String },

    /// The cast rejected the raw environment value.
    ///
    /// SAFETY: `raw` is kept for inspection but is not part of the message.
    #[error("Invalid value for {key}: {source}")]
    CastFailure {
        key: String,
        raw: String,
        #[source]
        source: CastError,
    },

    /// Neither the key as given nor its prefixed form has been resolved.
    #[error("Variable {key:?} is not defined in this environment")]
    KeyNotFound { key: String },

    /// The key was resolved, but with a different value type.
    #[error("Variable {key} holds a value of type {actual}, not {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Environment variable names must not be empty")]
    EmptyName,

    #[error("Environment variable names must be UPPERCASE (got {name:?})")]
    NameNotUppercase { name: String },

    #[error("Environment variable prefixes must be UPPERCASE (got {prefix:?})")]
    PrefixNotUppercase { prefix: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl EnvError {
    /// The fully-qualified key this error concerns, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            EnvError::MissingRequiredVariable { key }
            | EnvError::CastFailure { key, .. }
            | EnvError::KeyNotFound { key }
            | EnvError::TypeMismatch { key, .. } => Some(key),
            _ => None,
        }
    }
}
