//! Coercion dispatcher
//!
//! Maps a type tag to its converter and wraps the typed output back into a
//! `Value`. Unknown tags are not an error: the value passes through
//! unchanged.

use crate::value::Value;

use super::geo::{to_latitude, to_longitude};
use super::numeric::{to_boolean, to_double, to_number};
use super::outcome::Coerced;
use super::record::to_record;
use super::strings::{
    to_base64, to_color, to_domain, to_email, to_phone, to_string, to_url, to_uuid,
};
use super::structural::{to_array, to_datetime, to_object};
use super::tag::TypeTag;

/// Coerces `value` to `tag`.
///
/// `table` is only consulted for `TypeTag::Record`; empty accepts any
/// table. On failure the returned value is the converter's failure value,
/// with `Value::Null` standing in for an absent datetime or record.
pub fn convert(tag: &TypeTag, table: &str, value: Value) -> Coerced<Value> {
    match tag {
        TypeTag::Url => to_url(&value).map(Value::String),
        TypeTag::Uuid => to_uuid(&value).map(Value::String),
        TypeTag::Color => to_color(&value).map(Value::String),
        TypeTag::Email => to_email(&value).map(Value::String),
        TypeTag::Phone => to_phone(&value).map(Value::String),
        TypeTag::Array => to_array(value).map(Value::Array),
        TypeTag::Object => to_object(value).map(Value::Object),
        TypeTag::Domain => to_domain(&value).map(Value::String),
        TypeTag::Base64 => to_base64(&value).map(Value::String),
        TypeTag::String => to_string(value).map(Value::String),
        TypeTag::Number => to_number(&value).map(Value::Float),
        TypeTag::Double => to_double(&value).map(Value::Float),
        TypeTag::Boolean => to_boolean(&value).map(Value::Bool),
        TypeTag::Datetime => {
            to_datetime(value).map(|dt| dt.map_or(Value::Null, Value::Datetime))
        }
        TypeTag::Latitude => to_latitude(&value).map(Value::Float),
        TypeTag::Longitude => to_longitude(&value).map(Value::Float),
        TypeTag::Record => {
            to_record(value, table).map(|thing| thing.map_or(Value::Null, Value::Thing))
        }
        TypeTag::Unknown(_) => Coerced::ok(value),
    }
}

/// Parses `tag` and coerces `value` to it.
pub fn convert_str(tag: &str, table: &str, value: Value) -> Coerced<Value> {
    convert(&TypeTag::parse(tag), table, value)
}
