//! Numeric and boolean converters
//!
//! Already-numeric input converts directly and cannot fail. Strings are
//! parsed; anything else is rendered first and then parsed. A failed parse
//! resets to the zero value (`0.0` or `false`).
//!
//! `number` and `double` differ only in their parse policy: `number`
//! truncates a parsed fraction, `double` keeps it.

use crate::format;
use crate::value::Value;

use super::errors::ConvError;
use super::outcome::Coerced;

const NUMBER: &str = "a number";
const BOOLEAN: &str = "a boolean";

/// Coerces to an integer-valued float.
pub fn to_number(value: &Value) -> Coerced<f64> {
    match value {
        Value::Int(i) => Coerced::ok(*i as f64),
        Value::Float(n) => Coerced::ok(*n),
        Value::String(s) => parse_number(s),
        other => parse_number(&other.to_string()),
    }
}

/// Coerces to a float, keeping any fraction.
pub fn to_double(value: &Value) -> Coerced<f64> {
    match value {
        Value::Int(i) => Coerced::ok(*i as f64),
        Value::Float(n) => Coerced::ok(*n),
        Value::String(s) => parse_double(s),
        other => parse_double(&other.to_string()),
    }
}

/// Coerces to a boolean. Numbers are true only when strictly positive.
pub fn to_boolean(value: &Value) -> Coerced<bool> {
    match value {
        Value::Int(i) => Coerced::ok(*i > 0),
        Value::Float(n) => Coerced::ok(*n > 0.0),
        Value::String(s) => parse_boolean(s),
        other => parse_boolean(&other.to_string()),
    }
}

fn parse_number(s: &str) -> Coerced<f64> {
    match format::to_float(s) {
        // Saturates at the i64 bounds; NaN becomes 0
        Some(n) => Coerced::ok((n as i64) as f64),
        None => Coerced::failed(0.0, ConvError::mismatch(NUMBER, s)),
    }
}

fn parse_double(s: &str) -> Coerced<f64> {
    match format::to_float(s) {
        Some(n) => Coerced::ok(n),
        None => Coerced::failed(0.0, ConvError::mismatch(NUMBER, s)),
    }
}

fn parse_boolean(s: &str) -> Coerced<bool> {
    match format::to_bool(s) {
        Some(b) => Coerced::ok(b),
        None => Coerced::failed(false, ConvError::mismatch(BOOLEAN, s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_truncates_parsed_fraction() {
        let c = to_number(&Value::from("3.7"));
        assert!(c.is_ok());
        assert_eq!(c.value, 3.0);

        assert_eq!(to_number(&Value::from("-3.7")).value, -3.0);
    }

    #[test]
    fn test_double_keeps_fraction() {
        let c = to_double(&Value::from("3.7"));
        assert!(c.is_ok());
        assert_eq!(c.value, 3.7);
    }

    #[test]
    fn test_number_direct_numeric_input() {
        assert_eq!(to_number(&Value::Int(42)).value, 42.0);
        // Direct floats are not parsed, so nothing is truncated
        assert_eq!(to_number(&Value::Float(2.5)).value, 2.5);
    }

    #[test]
    fn test_number_saturates_and_zeroes_nan() {
        assert_eq!(to_number(&Value::from("1e300")).value, i64::MAX as f64);
        assert_eq!(to_number(&Value::from("NaN")).value, 0.0);
    }

    #[test]
    fn test_number_failure_resets_to_zero() {
        let c = to_number(&Value::from("twelve"));
        assert_eq!(c.value, 0.0);
        assert_eq!(
            c.error.unwrap().to_string(),
            "Expected a number, but found 'twelve'"
        );
    }

    #[test]
    fn test_double_failure_resets_to_zero() {
        let c = to_double(&Value::Null);
        assert_eq!(c.value, 0.0);
        assert_eq!(c.error.unwrap().found(), "null");
    }

    #[test]
    fn test_numeric_renders_non_strings() {
        assert!(to_double(&Value::Bool(true)).is_err());
        let c = to_double(&Value::from(json!([1])));
        assert_eq!(c.error.unwrap().found(), "[1]");
    }

    #[test]
    fn test_boolean_numeric_truthiness_is_positive() {
        assert!(to_boolean(&Value::Int(1)).value);
        assert!(!to_boolean(&Value::Int(0)).value);

        let c = to_boolean(&Value::Int(-5));
        assert!(c.is_ok());
        assert!(!c.value);

        assert!(to_boolean(&Value::Float(0.1)).value);
        assert!(!to_boolean(&Value::Float(-0.1)).value);
        assert!(!to_boolean(&Value::Float(f64::NAN)).value);
    }

    #[test]
    fn test_boolean_literals() {
        assert!(to_boolean(&Value::from("true")).value);
        assert!(to_boolean(&Value::from("T")).value);
        assert!(!to_boolean(&Value::from("0")).value);
        assert!(to_boolean(&Value::Bool(true)).value);
        assert!(!to_boolean(&Value::Bool(false)).value);
    }

    #[test]
    fn test_boolean_failure() {
        let c = to_boolean(&Value::from("nonsense"));
        assert!(!c.value);
        assert_eq!(
            c.error.unwrap().to_string(),
            "Expected a boolean, but found 'nonsense'"
        );
    }
}
