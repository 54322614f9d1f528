//! Typed record reference converter

use crate::value::{Thing, Value};

use super::errors::ConvError;
use super::outcome::Coerced;

/// Asserts `value` is a record reference in `table`.
///
/// An empty `table` accepts a reference to any table. Strings that look
/// like `tb:id` are not references and are rejected.
pub fn to_record(value: Value, table: &str) -> Coerced<Option<Thing>> {
    match value {
        Value::Thing(thing) if table.is_empty() || thing.table() == table => {
            Coerced::ok(Some(thing))
        }
        other => Coerced::failed(
            None,
            ConvError::mismatch(format!("a record of type '{}'", table), other.to_string()),
        ),
    }
}
