//! Populating the process environment from `.env` files.
//!
//! Responsibilities:
//! - Load a `.env` file into the process environment via `dotenvy`.
//! - Enforce the `DOTENV_DISABLED` gate so tests and deployments can opt out.
//! - Translate `dotenvy` errors into [`EnvError`] without leaking file contents.
//!
//! Does NOT handle:
//! - Parsing `.env` syntax (delegated to `dotenvy`).
//! - Resolving or casting variables (see `environment`).
//!
//! Invariants / Assumptions:
//! - Loading is explicit; nothing in this crate loads `.env` implicitly.
//! - Variables already present in the process environment are not overridden.
//! - A missing `.env` file is not an error.

use std::path::{Path, PathBuf};

use crate::constants::{DOTENV_DISABLED_VALUES, DOTENV_DISABLED_VAR};
use crate::error::{EnvError, Result};

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    std::env::var(DOTENV_DISABLED_VAR)
        .ok()
        .is_some_and(|value| DOTENV_DISABLED_VALUES.contains(&value.as_str()))
}

/// Load the nearest `.env` file (searching the current directory and its parents).
///
/// Returns the path of the loaded file, or `None` if loading is disabled or
/// no file was found.
///
/// # Errors
///
/// - `EnvError::DotenvParse` if the file has invalid syntax.
/// - `EnvError::DotenvIo` if the file exists but cannot be read.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    if dotenv_disabled() {
        tracing::debug!("Skipping .env loading, {} is set", DOTENV_DISABLED_VAR);
        return Ok(None);
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(Some(path))
        }
        Err(e) => map_dotenv_error(e),
    }
}

/// Load a specific `.env` file.
///
/// Same gate and error policy as [`load_dotenv`].
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    if dotenv_disabled() {
        tracing::debug!("Skipping .env loading, {} is set", DOTENV_DISABLED_VAR);
        return Ok(None);
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(Some(path.to_path_buf()))
        }
        Err(e) => map_dotenv_error(e),
    }
}

/// Missing files are not errors; everything else is mapped without file contents.
fn map_dotenv_error(err: dotenvy::Error) -> Result<Option<PathBuf>> {
    match err {
        e if e.not_found() => Ok(None),
        dotenvy::Error::LineParse(_, idx) => Err(EnvError::DotenvParse { error_index: idx }),
        dotenvy::Error::Io(io_err) => Err(EnvError::DotenvIo {
            kind: io_err.kind(),
        }),
        _ => Err(EnvError::DotenvUnknown),
    }
}
