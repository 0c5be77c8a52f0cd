//! Value parsing for typed accessors.
//!
//! Parsing is modeled with explicit `Result`s here; the public getters in
//! `accessor` swallow every failure into a default or zero value.
//!
//! Invariants:
//! - Slice parsing is all-or-nothing: one bad element fails the whole value.
//! - Errors carry the failing element's index, never its content.

use std::str::FromStr;

use crate::constants::SLICE_SEPARATOR;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ValueError {
    /// The raw value did not parse as the requested scalar type.
    Scalar,
    /// Element `index` of a comma-separated value did not parse.
    Element { index: usize },
}

pub(crate) fn scalar<T: FromStr>(raw: &str) -> Result<T, ValueError> {
    raw.parse().map_err(|_| ValueError::Scalar)
}

/// Accepts the conventional truthy/falsy tokens, case-insensitive.
pub(crate) fn boolean(raw: &str) -> Result<bool, ValueError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(ValueError::Scalar),
    }
}

/// Split on commas, trim each part, parse each part with `parse`.
pub(crate) fn slice<T>(
    raw: &str,
    parse: impl Fn(&str) -> Result<T, ValueError>,
) -> Result<Vec<T>, ValueError> {
    let mut values = Vec::new();
    for (index, part) in raw.split(SLICE_SEPARATOR).enumerate() {
        let value = parse(part.trim()).map_err(|_| ValueError::Element { index })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_parses_numbers() {
        assert_eq!(scalar::<i32>("1234"), Ok(1234));
        assert_eq!(scalar::<i64>("-9000000000"), Ok(-9_000_000_000));
        assert_eq!(scalar::<f64>("12.34"), Ok(12.34));
        assert_eq!(scalar::<i32>("12.34"), Err(ValueError::Scalar));
        assert_eq!(scalar::<f64>(""), Err(ValueError::Scalar));
    }

    #[test]
    fn boolean_accepts_conventional_tokens_case_insensitive() {
        for token in ["true", "TRUE", "True", "t", "T", "1"] {
            assert_eq!(boolean(token), Ok(true), "token {token:?}");
        }
        for token in ["false", "FALSE", "f", "F", "0"] {
            assert_eq!(boolean(token), Ok(false), "token {token:?}");
        }
        for token in ["yes", "no", "on", "off", "2", ""] {
            assert_eq!(boolean(token), Err(ValueError::Scalar), "token {token:?}");
        }
    }

    #[test]
    fn slice_trims_each_part() {
        assert_eq!(
            slice(" a , b", |part| Ok(part.to_string())),
            Ok(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(slice(" 1, 2 ,3 ", scalar::<i32>), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn slice_is_all_or_nothing() {
        assert_eq!(
            slice("1,2,x", scalar::<i32>),
            Err(ValueError::Element { index: 2 })
        );
        assert_eq!(
            slice("x,2,3", scalar::<i32>),
            Err(ValueError::Element { index: 0 })
        );
    }
}
