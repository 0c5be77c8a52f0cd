//! Typed, default-aware reads of loaded environment state.
//!
//! Responsibilities:
//! - Resolve raw values (live process environment first, then the isolated
//!   [`EnvMap`](crate::EnvMap) of the loaded file).
//! - Convert raw values to the requested type, falling back to the supplied
//!   default or the type's zero value.
//!
//! Does NOT handle:
//! - Loading env files (see `loader`).
//!
//! Invariants:
//! - No getter ever returns an error; parse failures degrade silently to the
//!   default or zero value. Callers relying on zero-value fallbacks depend on
//!   this, so it must not be tightened into visible errors.
//! - A present-but-empty variable is indistinguishable from an absent one.
//! - Slice getters are all-or-nothing: one bad element yields an empty vec,
//!   and the default is NOT consulted on that path (only when the raw value
//!   itself was empty).

mod parse;

use tracing::debug;

use crate::loader::Config;
use parse::ValueError;

impl Config {
    /// Raw lookup: live process environment wins; the loaded map answers only
    /// when the variable is unset (or empty) there.
    fn raw(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => self
                .vars
                .get(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    fn typed<T: Default>(
        &self,
        key: &str,
        default: Option<T>,
        parse: impl Fn(&str) -> Result<T, ValueError>,
    ) -> T {
        let Some(raw) = self.raw(key) else {
            return default.unwrap_or_default();
        };
        match parse(&raw) {
            Ok(value) => value,
            Err(_) => {
                debug!(key, "malformed value, using default");
                default.unwrap_or_default()
            }
        }
    }

    fn typed_slice<T>(
        &self,
        key: &str,
        default: Option<Vec<T>>,
        parse: impl Fn(&str) -> Result<T, ValueError>,
    ) -> Vec<T> {
        let Some(raw) = self.raw(key) else {
            return default.unwrap_or_default();
        };
        match parse::slice(&raw, parse) {
            Ok(values) => values,
            Err(ValueError::Element { index }) => {
                debug!(key, index, "malformed slice element, returning empty");
                Vec::new()
            }
            Err(ValueError::Scalar) => Vec::new(),
        }
    }

    /// Raw string value of `key`, or `default`, or `""`.
    pub fn string<'a>(&self, key: &str, default: impl Into<Option<&'a str>>) -> String {
        match self.raw(key) {
            Some(value) => value,
            None => default.into().map(str::to_string).unwrap_or_default(),
        }
    }

    pub fn int(&self, key: &str, default: impl Into<Option<i32>>) -> i32 {
        self.typed(key, default.into(), parse::scalar::<i32>)
    }

    pub fn int64(&self, key: &str, default: impl Into<Option<i64>>) -> i64 {
        self.typed(key, default.into(), parse::scalar::<i64>)
    }

    pub fn float64(&self, key: &str, default: impl Into<Option<f64>>) -> f64 {
        self.typed(key, default.into(), parse::scalar::<f64>)
    }

    /// Accepts `true`/`false`/`1`/`0`/`t`/`f`, case-insensitive.
    pub fn bool(&self, key: &str, default: impl Into<Option<bool>>) -> bool {
        self.typed(key, default.into(), parse::boolean)
    }

    /// Comma-separated string values, each trimmed. Never fails to parse.
    pub fn string_slice(&self, key: &str, default: impl Into<Option<Vec<String>>>) -> Vec<String> {
        self.typed_slice(key, default.into(), |part| Ok(part.to_string()))
    }

    pub fn int_slice(&self, key: &str, default: impl Into<Option<Vec<i32>>>) -> Vec<i32> {
        self.typed_slice(key, default.into(), parse::scalar::<i32>)
    }

    pub fn int64_slice(&self, key: &str, default: impl Into<Option<Vec<i64>>>) -> Vec<i64> {
        self.typed_slice(key, default.into(), parse::scalar::<i64>)
    }

    pub fn float64_slice(&self, key: &str, default: impl Into<Option<Vec<f64>>>) -> Vec<f64> {
        self.typed_slice(key, default.into(), parse::scalar::<f64>)
    }

    pub fn bool_slice(&self, key: &str, default: impl Into<Option<Vec<bool>>>) -> Vec<bool> {
        self.typed_slice(key, default.into(), parse::boolean)
    }
}
