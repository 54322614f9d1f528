//! Canonical display rendering
//!
//! Rendering is total: every value has exactly one string form, and the
//! same value always renders the same way. Top-level strings render as
//! their raw contents; strings nested inside containers are quoted so that
//! `["a, b"]` and `["a", "b"]` stay distinguishable.

use std::fmt;

use chrono::SecondsFormat;

use super::types::{Thing, Value};

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tb, self.id)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => write_nested(f, other),
        }
    }
}

/// Writes a value in its nested (container element) form.
fn write_nested(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Int(i) => write!(f, "{}", i),
        Value::Float(n) => write!(f, "{}", n),
        Value::String(s) => write_quoted(f, s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(map) => {
            if map.is_empty() {
                return f.write_str("{}");
            }
            f.write_str("{ ")?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                if is_bare_key(key) {
                    f.write_str(key)?;
                } else {
                    write_quoted(f, key)?;
                }
                f.write_str(": ")?;
                write_nested(f, item)?;
            }
            f.write_str(" }")
        }
        Value::Datetime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Value::Thing(thing) => write!(f, "{}", thing),
    }
}

/// Writes a double-quoted, JSON-escaped string.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-42).to_string(), "-42");
        assert_eq!(Value::Float(3.7).to_string(), "3.7");
        assert_eq!(Value::Float(3.0).to_string(), "3");
        assert_eq!(Value::from("hello world").to_string(), "hello world");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_floats_never_use_exponents() {
        assert_eq!(Value::Float(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::Float(1e-7).to_string(), "0.0000001");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_array_quotes_nested_strings() {
        let value = Value::Array(vec![Value::Int(1), Value::from("a, b"), Value::Null]);
        assert_eq!(value.to_string(), "[1, \"a, b\", null]");
    }

    #[test]
    fn test_object_key_order_is_deterministic() {
        let mut map = BTreeMap::new();
        map.insert("zebra".to_string(), Value::Int(1));
        map.insert("apple".to_string(), Value::from("x"));
        map.insert("odd key".to_string(), Value::Bool(false));
        assert_eq!(
            Value::Object(map).to_string(),
            "{ apple: \"x\", \"odd key\": false, zebra: 1 }"
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
        assert_eq!(Value::Object(BTreeMap::new()).to_string(), "{}");
    }

    #[test]
    fn test_escapes_in_nested_strings() {
        let value = Value::Array(vec![Value::from("say \"hi\"\n")]);
        assert_eq!(value.to_string(), "[\"say \\\"hi\\\"\\n\"]");
    }

    #[test]
    fn test_datetime() {
        let dt = Utc.with_ymd_and_hms(2016, 3, 14, 11, 19, 31).unwrap();
        assert_eq!(Value::Datetime(dt).to_string(), "2016-03-14T11:19:31Z");
    }

    #[test]
    fn test_thing() {
        let value = Value::Thing(Thing::new("person", "tobie"));
        assert_eq!(value.to_string(), "person:tobie");
    }
}
