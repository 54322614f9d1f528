//! Shape assertions: array, object, datetime
//!
//! No coercion across shapes. The input either already has the target
//! shape or the conversion fails with an empty value.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::value::Value;

use super::errors::ConvError;
use super::outcome::Coerced;

const ARRAY: &str = "an array";
const OBJECT: &str = "an object";
const DATETIME: &str = "a datetime";

pub fn to_array(value: Value) -> Coerced<Vec<Value>> {
    match value {
        Value::Array(items) => Coerced::ok(items),
        other => Coerced::failed(Vec::new(), ConvError::mismatch(ARRAY, other.to_string())),
    }
}

pub fn to_object(value: Value) -> Coerced<BTreeMap<String, Value>> {
    match value {
        Value::Object(map) => Coerced::ok(map),
        other => Coerced::failed(
            BTreeMap::new(),
            ConvError::mismatch(OBJECT, other.to_string()),
        ),
    }
}

/// Strings are not parsed: a datetime must already be a datetime.
pub fn to_datetime(value: Value) -> Coerced<Option<DateTime<Utc>>> {
    match value {
        Value::Datetime(dt) => Coerced::ok(Some(dt)),
        other => Coerced::failed(None, ConvError::mismatch(DATETIME, other.to_string())),
    }
}
