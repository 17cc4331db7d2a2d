//! Declarative, typed access to environment variables.
//!
//! This crate resolves configuration values from the process environment
//! (optionally populated from a `.env` file first), casts them to
//! application types, applies defaults, and keeps a read-only record of
//! everything it resolved for later inspection.
//!
//! ```
//! use dotenvironment::{DotEnvironment, MapSource, cast};
//!
//! let source = MapSource::new().with("APP_DEBUG", "1");
//! let mut env = DotEnvironment::with_source("APP_", source)?;
//!
//! let debug = env.variable_or("DEBUG", cast::truthy, false)?;
//! let workers = env.variable_or("WORKERS", cast::parse::<usize>(), 4)?;
//!
//! assert!(debug);
//! assert_eq!(workers, 4);
//! println!("{env}");
//! # Ok::<(), dotenvironment::EnvError>(())
//! ```

pub mod cast;
pub mod constants;
mod dotenv;
mod environment;
mod error;
mod source;

pub use cast::{Cast, CastError, CastFunction};
pub use constants::{DEFAULT_MARKER, DOTENV_DISABLED_VAR};
pub use dotenv::{dotenv_disabled, load_dotenv, load_dotenv_from};
pub use environment::{DotEnvironment, Entry, Fallback};
pub use error::{EnvError, Result};
pub use source::{EnvSource, MapSource, ProcessEnv};
