//! Tests for the resolver.
//!
//! Responsibilities:
//! - Test the resolution policy (cast, fallback, required) against in-memory sources.
//! - Test read access, membership, and rendering of resolved entries.
//! - Test resolution against the real process environment.
//!
//! Invariants / Assumptions:
//! - Only `process_env_tests` touches process-global state, and it serializes
//!   with `serial_test` plus `env_lock()`.

use std::sync::Mutex;

use crate::source::MapSource;

pub mod lookup_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// The source used throughout the examples: a prefixed user and no port.
pub fn onnymm_source() -> MapSource {
    MapSource::new()
        .with("ONNYMM_DB_USER", "root")
        .with("ONNYMM_DEBUG", "true")
}
