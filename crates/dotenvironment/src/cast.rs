//! The cast contract and the built-in casts.
//!
//! A cast turns the raw string read from the environment into an
//! application-typed value. Anything callable as `Fn(&str) -> Result<T, E>`
//! is a cast, so `str::parse::<u16>`, `chrono::NaiveDate::from_str` and
//! hand-written closures are all accepted without adapters.
//!
//! Invariants:
//! - Casts only ever see raw environment values. Fallback values are used
//!   verbatim and never pass through a cast.

use std::any::type_name;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

use crate::constants::{BOOLEAN_FALSE_VALUES, BOOLEAN_TRUE_VALUES, TRUTHY_VALUES};

/// Error produced by a failed cast.
pub type CastError = Box<dyn StdError + Send + Sync + 'static>;

/// A plain function usable as a cast.
///
/// ```
/// use dotenvironment::CastFunction;
///
/// let debug: CastFunction<bool> = |raw| Ok(raw == "1");
/// # let _ = debug;
/// ```
pub type CastFunction<T> = fn(&str) -> Result<T, CastError>;

/// Converts a raw environment value into `T`.
pub trait Cast<T> {
    fn cast(&self, raw: &str) -> Result<T, CastError>;

    /// Human-readable name of the produced type, used when rendering entries.
    fn type_label(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<T, E, F> Cast<T> for F
where
    F: Fn(&str) -> Result<T, E>,
    E: Into<CastError>,
{
    fn cast(&self, raw: &str) -> Result<T, CastError> {
        self(raw).map_err(Into::into)
    }
}

/// Cast through [`FromStr`], the analogue of using a type as its own constructor.
pub fn parse<T>() -> CastFunction<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    |raw: &str| raw.parse::<T>().map_err(|e| Box::new(e) as CastError)
}

/// Keep the raw value as an owned string.
pub fn string(raw: &str) -> Result<String, Infallible> {
    Ok(raw.to_string())
}

/// Lenient boolean: `1`, `true`, `True` and `TRUE` are true, everything else is false.
pub fn truthy(raw: &str) -> Result<bool, Infallible> {
    Ok(TRUTHY_VALUES.contains(&raw))
}

/// The raw value is not a recognised boolean spelling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected one of true/false, 1/0, yes/no, on/off")]
pub struct InvalidBoolean;

/// Strict boolean, case-insensitive, surrounding whitespace ignored.
pub fn boolean(raw: &str) -> Result<bool, InvalidBoolean> {
    let normalized = raw.trim().to_ascii_lowercase();
    if BOOLEAN_TRUE_VALUES.contains(&normalized.as_str()) {
        Ok(true)
    } else if BOOLEAN_FALSE_VALUES.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(InvalidBoolean)
    }
}

/// A list element failed to parse.
#[derive(Error, Debug)]
#[error("element {index} of the list is invalid: {source}")]
pub struct InvalidListElement {
    pub index: usize,
    #[source]
    pub source: CastError,
}

/// Split on `separator`, trim each element, and parse it through [`FromStr`].
///
/// An empty (or whitespace-only) value yields an empty list.
pub fn list<T>(separator: char) -> impl Fn(&str) -> Result<Vec<T>, InvalidListElement>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    move |raw: &str| {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        raw.split(separator)
            .enumerate()
            .map(|(index, item)| {
                item.trim()
                    .parse::<T>()
                    .map_err(|e| InvalidListElement {
                        index,
                        source: Box::new(e),
                    })
            })
            .collect()
    }
}

/// Wrap the raw value in a [`SecretString`] so it is redacted when rendered.
pub fn secret(raw: &str) -> Result<SecretString, Infallible> {
    Ok(SecretString::new(raw.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn run<T, C: Cast<T>>(cast: C, raw: &str) -> Result<T, CastError> {
        cast.cast(raw)
    }

    #[test]
    fn test_parse_accepts_numbers() {
        assert_eq!(run(parse::<u16>(), "5432").unwrap(), 5432);
        assert_eq!(run(parse::<i64>(), "-7").unwrap(), -7);
        assert!((run(parse::<f64>(), "0.25").unwrap() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = run(parse::<u16>(), "not-a-port").unwrap_err();
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_std_parse_is_a_cast() {
        assert_eq!(run(str::parse::<u8>, "42").unwrap(), 42);
        assert!(run(str::parse::<u8>, "300").is_err());
    }

    #[test]
    fn test_closures_are_casts() {
        let upper = |raw: &str| Ok::<_, Infallible>(raw.to_uppercase());
        assert_eq!(run(upper, "abc").unwrap(), "ABC");

        let fails = |_: &str| Err::<u8, _>("nope");
        assert_eq!(run(fails, "x").unwrap_err().to_string(), "nope");
    }

    #[test]
    fn test_cast_function_alias() {
        let cast: CastFunction<usize> = |raw| Ok(raw.len());
        assert_eq!(run(cast, "four").unwrap(), 4);
    }

    #[test]
    fn test_truthy_matches_known_spellings_only() {
        for raw in ["1", "true", "True", "TRUE"] {
            assert!(truthy(raw).unwrap(), "{raw} should be truthy");
        }
        for raw in ["0", "false", "tRuE", "yes", ""] {
            assert!(!truthy(raw).unwrap(), "{raw} should not be truthy");
        }
    }

    #[test]
    fn test_boolean_is_strict() {
        assert_eq!(boolean("YES"), Ok(true));
        assert_eq!(boolean(" off "), Ok(false));
        assert_eq!(boolean("0"), Ok(false));
        assert_eq!(boolean("maybe"), Err(InvalidBoolean));
    }

    #[test]
    fn test_list_splits_and_trims() {
        let ports = list::<u16>(',');
        assert_eq!(ports("80, 443 ,8080").unwrap(), vec![80, 443, 8080]);
        assert!(ports("").unwrap().is_empty());

        let err = ports("80,http").unwrap_err();
        assert_eq!(err.index, 1);
    }

    #[test]
    fn test_secret_is_redacted_in_debug() {
        let value = secret("hunter2").unwrap();
        assert_eq!(value.expose_secret(), "hunter2");
        assert!(!format!("{value:?}").contains("hunter2"));
    }

    #[test]
    fn test_type_label_names_output_type() {
        assert_eq!(Cast::<u16>::type_label(&parse::<u16>()), "u16");
        assert_eq!(
            Cast::<String>::type_label(&string),
            "alloc::string::String"
        );
    }
}
