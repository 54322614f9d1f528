//! Latitude and longitude converters
//!
//! Input is always rendered first. Unlike the numeric converters, a range
//! failure does not reset to zero: the rendering is still parsed and the
//! parse is returned next to the error. Unparsable input yields `0.0`.

use crate::format;
use crate::value::Value;

use super::errors::ConvError;
use super::outcome::Coerced;

const LATITUDE: &str = "a latitude value";
const LONGITUDE: &str = "a longitude value";

pub fn to_latitude(value: &Value) -> Coerced<f64> {
    coordinate(value, LATITUDE, format::is_latitude)
}

pub fn to_longitude(value: &Value) -> Coerced<f64> {
    coordinate(value, LONGITUDE, format::is_longitude)
}

fn coordinate(value: &Value, expected: &str, in_range: fn(&str) -> bool) -> Coerced<f64> {
    let rendered = value.to_string();
    let parsed = format::to_float(&rendered).unwrap_or(0.0);
    if in_range(&rendered) {
        Coerced::ok(parsed)
    } else {
        Coerced::failed(parsed, ConvError::mismatch(expected, rendered))
    }
}
