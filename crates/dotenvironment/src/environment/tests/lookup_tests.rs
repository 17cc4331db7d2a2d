//! Tests for read access: `get`, `entry`, `contains`, and iteration.

use super::onnymm_source;
use crate::cast;
use crate::environment::DotEnvironment;
use crate::error::EnvError;
use crate::source::MapSource;

fn loaded() -> DotEnvironment<MapSource> {
    let mut env = DotEnvironment::with_source("ONNYMM_", onnymm_source()).unwrap();
    env.required("DB_USER", cast::string).unwrap();
    env.variable_or("DB_PORT", cast::parse::<u16>(), 5432).unwrap();
    env
}

#[test]
fn test_get_by_bare_name_and_full_key() {
    let env = loaded();

    assert_eq!(env.get::<u16>("DB_PORT").unwrap(), &5432);
    assert_eq!(env.get::<u16>("ONNYMM_DB_PORT").unwrap(), &5432);
    assert_eq!(env.get::<String>("DB_USER").unwrap(), "root");
}

#[test]
fn test_get_unknown_key() {
    let env = loaded();

    match env.get::<u16>("DB_HOST") {
        Err(EnvError::KeyNotFound { key }) => assert_eq!(key, "DB_HOST"),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn test_get_wrong_type() {
    let env = loaded();

    let err = env.get::<u32>("DB_PORT").unwrap_err();
    assert!(matches!(
        err,
        EnvError::TypeMismatch { ref key, actual: "u16", expected: "u32" } if key == "ONNYMM_DB_PORT"
    ));
}

#[test]
fn test_contains_before_and_after() {
    let mut env = DotEnvironment::with_source("ONNYMM_", onnymm_source()).unwrap();

    assert!(!env.contains("DEBUG"));
    assert!(!env.contains("ONNYMM_DEBUG"));

    env.required("DEBUG", cast::boolean).unwrap();

    assert!(env.contains("DEBUG"));
    assert!(env.contains("ONNYMM_DEBUG"));
    assert!(!env.contains("debug"));
    assert!(!env.contains(""));
}

#[test]
fn test_verbatim_key_wins_over_prefixed() {
    // "P_A" is both a stored key and a bare name for "P_P_A"; the stored key wins.
    let source = MapSource::new().with("P_A", "outer").with("P_P_A", "inner");
    let mut env = DotEnvironment::with_source("P_", source).unwrap();

    env.required("A", cast::string).unwrap();
    env.required("P_A", cast::string).unwrap();

    assert_eq!(env.get::<String>("P_A").unwrap(), "outer");
    assert_eq!(env.get::<String>("A").unwrap(), "outer");
    assert_eq!(env.get::<String>("P_P_A").unwrap(), "inner");
}

#[test]
fn test_iteration_follows_request_order() {
    let env = loaded();

    let keys: Vec<_> = env.keys().collect();
    assert_eq!(keys, vec!["ONNYMM_DB_USER", "ONNYMM_DB_PORT"]);

    let defaults: Vec<bool> = (&env).into_iter().map(|e| e.is_default()).collect();
    assert_eq!(defaults, vec![false, true]);
    assert_eq!(env.iter().count(), env.len());
}

#[test]
fn test_entry_exposes_cast_label() {
    let env = loaded();

    assert_eq!(env.entry("DB_PORT").unwrap().cast(), "u16");
    assert_eq!(
        env.entry("ONNYMM_DB_USER").unwrap().cast(),
        "alloc::string::String"
    );
}
