//! JSON interop
//!
//! Plain JSON maps onto the obvious kinds. Two single-key objects carry the
//! kinds JSON has no syntax for:
//!
//! - `{"$datetime": "2016-03-14T11:19:31Z"}` decodes to `Value::Datetime`
//! - `{"$thing": "person:tobie"}` decodes to `Value::Thing`
//!
//! A marker object whose payload does not parse stays a plain object.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number};

use super::types::{Thing, Value};

const DATETIME_KEY: &str = "$datetime";
const THING_KEY: &str = "$thing";

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => from_object(map),
        }
    }
}

fn from_object(map: Map<String, serde_json::Value>) -> Value {
    if map.len() == 1 {
        if let Some(serde_json::Value::String(raw)) = map.get(DATETIME_KEY) {
            if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
                return Value::Datetime(dt.with_timezone(&Utc));
            }
        }
        if let Some(serde_json::Value::String(raw)) = map.get(THING_KEY) {
            if let Some(thing) = Thing::parse(raw) {
                return Value::Thing(thing);
            }
        }
    }

    let fields: BTreeMap<String, Value> = map
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect();
    Value::Object(fields)
}

impl Value {
    /// Encodes this value as JSON.
    ///
    /// Non-finite floats have no JSON form and encode as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(n) => Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Value::Datetime(dt) => {
                marker(DATETIME_KEY, dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Thing(thing) => marker(THING_KEY, thing.to_string()),
        }
    }
}

fn marker(key: &str, payload: String) -> serde_json::Value {
    let mut map = Map::new();
    map.insert(key.to_string(), serde_json::Value::String(payload));
    serde_json::Value::Object(map)
}
