//! Value and record reference definitions
//!
//! Supported kinds:
//! - null
//! - bool: Boolean
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - string: UTF-8 string
//! - array: ordered sequence of values
//! - object: string-keyed mapping (deterministic key order)
//! - datetime: UTC timestamp
//! - thing: typed record reference (table + key)

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// A typed record reference: a record key scoped to a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Thing {
    /// Table identifier
    pub tb: String,
    /// Record key within the table
    pub id: String,
}

impl Thing {
    /// Create a new record reference
    pub fn new(tb: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            tb: tb.into(),
            id: id.into(),
        }
    }

    /// Returns the table identifier
    pub fn table(&self) -> &str {
        &self.tb
    }

    /// Returns the record key
    pub fn key(&self) -> &str {
        &self.id
    }

    /// Parses `tb:id`, splitting at the first colon.
    ///
    /// Returns `None` if there is no colon or either side is empty.
    pub fn parse(s: &str) -> Option<Self> {
        let (tb, id) = s.split_once(':')?;
        if tb.is_empty() || id.is_empty() {
            return None;
        }
        Some(Self::new(tb, id))
    }
}

/// An untyped runtime value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// String-keyed mapping
    Object(BTreeMap<String, Value>),
    /// UTC timestamp
    Datetime(DateTime<Utc>),
    /// Typed record reference
    Thing(Thing),
}

impl Value {
    /// Returns the kind name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Datetime(_) => "datetime",
            Value::Thing(_) => "thing",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self, Value::Datetime(_))
    }

    pub fn is_thing(&self) -> bool {
        matches!(self, Value::Thing(_))
    }

    /// Returns the record reference if this value is one
    pub fn as_thing(&self) -> Option<&Thing> {
        match self {
            Value::Thing(thing) => Some(thing),
            _ => None,
        }
    }

    /// Returns the string contents if this value is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Object(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Datetime(v)
    }
}

impl From<Thing> for Value {
    fn from(v: Thing) -> Self {
        Value::Thing(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thing_parse() {
        let thing = Thing::parse("person:tobie").unwrap();
        assert_eq!(thing.table(), "person");
        assert_eq!(thing.key(), "tobie");
    }

    #[test]
    fn test_thing_parse_splits_at_first_colon() {
        let thing = Thing::parse("event:2024:01").unwrap();
        assert_eq!(thing.tb, "event");
        assert_eq!(thing.id, "2024:01");
    }

    #[test]
    fn test_thing_parse_rejects_incomplete() {
        assert!(Thing::parse("person").is_none());
        assert!(Thing::parse(":tobie").is_none());
        assert!(Thing::parse("person:").is_none());
    }

    #[test]
    fn test_kind_checks() {
        assert!(Value::Null.is_null());
        assert!(Value::from(true).is_bool());
        assert!(Value::from(1i64).is_int());
        assert!(Value::from(1.5).is_float());
        assert!(Value::from("x").is_string());
        assert!(Value::Array(vec![]).is_array());
        assert!(Value::Object(BTreeMap::new()).is_object());
        assert!(Value::Datetime(Utc::now()).is_datetime());
        assert!(Value::from(Thing::new("person", "tobie")).is_thing());
        assert!(!Value::from("person:tobie").is_thing());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::from(2i64).kind_name(), "int");
        assert_eq!(Value::from(2.0).kind_name(), "float");
        assert_eq!(Value::from(Thing::new("a", "b")).kind_name(), "thing");
    }

    #[test]
    fn test_as_thing() {
        let value = Value::from(Thing::new("animal", "cat"));
        assert_eq!(value.as_thing().map(Thing::table), Some("animal"));
        assert!(Value::from("animal:cat").as_thing().is_none());
    }
}
