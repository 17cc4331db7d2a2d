//! Centralized constants for the dotenvironment crate.
//!
//! This module contains the marker strings and environment variable names
//! shared between the resolver, its rendering, and the `.env` loader.

// =============================================================================
// Rendering
// =============================================================================

/// Suffix appended to a rendered entry whose value came from its fallback.
pub const DEFAULT_MARKER: &str = " (default)";

/// Type name used when rendering the resolver itself.
pub const CONTAINER_NAME: &str = "DotEnvironment";

/// Indentation used for each entry line in the rendered listing.
pub const ENTRY_INDENT: &str = "    ";

// =============================================================================
// Dotenv loading
// =============================================================================

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Values of [`DOTENV_DISABLED_VAR`] that disable `.env` loading.
pub const DOTENV_DISABLED_VALUES: &[&str] = &["1", "true"];

// =============================================================================
// Casting
// =============================================================================

/// Raw values accepted as `true` by [`crate::cast::truthy`].
pub const TRUTHY_VALUES: &[&str] = &["1", "true", "True", "TRUE"];

/// Raw values accepted as `true` by [`crate::cast::boolean`] (compared case-insensitively).
pub const BOOLEAN_TRUE_VALUES: &[&str] = &["true", "1", "yes", "on"];

/// Raw values accepted as `false` by [`crate::cast::boolean`] (compared case-insensitively).
pub const BOOLEAN_FALSE_VALUES: &[&str] = &["false", "0", "no", "off"];
