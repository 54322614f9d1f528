//! Format-validated string converters
//!
//! Each converter renders its input, checks the rendering against a named
//! format and returns the rendering. On failure the rendering is still
//! returned alongside the error; it is not validated and callers may only
//! use it for diagnostics.

use crate::format;
use crate::value::Value;

use super::errors::ConvError;
use super::outcome::Coerced;

const URL: &str = "a URL";
const UUID: &str = "a UUID";
const EMAIL: &str = "an email address";
const PHONE: &str = "a phone number";
const COLOR: &str = "a HEX or RGB color";
const DOMAIN: &str = "a domain name";
const BASE64: &str = "base64 data";
const STRING: &str = "a string";

/// Renders `value` and checks it with `is_valid`.
fn validated(value: &Value, expected: &str, is_valid: fn(&str) -> bool) -> Coerced<String> {
    let rendered = value.to_string();
    if is_valid(&rendered) {
        Coerced::ok(rendered)
    } else {
        let error = ConvError::mismatch(expected, rendered.as_str());
        Coerced::failed(rendered, error)
    }
}

pub fn to_url(value: &Value) -> Coerced<String> {
    validated(value, URL, format::is_url)
}

pub fn to_uuid(value: &Value) -> Coerced<String> {
    validated(value, UUID, format::is_uuid)
}

/// Validates then normalizes an email address.
///
/// Normalization runs whether or not the raw rendering was valid, so a
/// rejected address still comes back trimmed and lower-cased.
pub fn to_email(value: &Value) -> Coerced<String> {
    let rendered = value.to_string();
    let normalized = format::normalize_email(&rendered);
    if format::is_email(&rendered) {
        Coerced::ok(normalized)
    } else {
        Coerced::failed(normalized, ConvError::mismatch(EMAIL, rendered))
    }
}

pub fn to_phone(value: &Value) -> Coerced<String> {
    validated(value, PHONE, format::is_phone)
}

/// Accepts hex (`#fff`, `#ff00aa`) or `rgb(r, g, b)` colors.
pub fn to_color(value: &Value) -> Coerced<String> {
    validated(value, COLOR, |s| {
        format::is_hex_color(s) || format::is_rgb_color(s)
    })
}

pub fn to_domain(value: &Value) -> Coerced<String> {
    validated(value, DOMAIN, format::is_dns_name)
}

pub fn to_base64(value: &Value) -> Coerced<String> {
    validated(value, BASE64, format::is_base64)
}

/// Renders any scalar as a string. Containers are rejected with an empty
/// string.
pub fn to_string(value: Value) -> Coerced<String> {
    match value {
        Value::String(s) => Coerced::ok(s),
        Value::Array(_) | Value::Object(_) => {
            Coerced::failed(String::new(), ConvError::mismatch(STRING, value.to_string()))
        }
        other => Coerced::ok(other.to_string()),
    }
}
