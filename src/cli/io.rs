//! JSON I/O handling for CLI
//!
//! - Input: one JSON document per line
//! - Output: one JSON response per line
//! - UTF-8 only

use std::io::Write;

use serde::Deserialize;
use serde_json::{json, Value as Json};

use crate::conv::{Coerced, ConvError};
use crate::value::Value;

use super::errors::CliResult;

/// A single batch request line
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    /// Target type tag
    #[serde(rename = "type")]
    pub tag: String,
    /// Expected record table; falls back to the configured default
    #[serde(default)]
    pub table: Option<String>,
    /// Value to convert; absent means null
    #[serde(default)]
    pub value: Json,
}

/// Parses a batch request line
pub fn parse_request(line: &str) -> CliResult<ConvertRequest> {
    Ok(serde_json::from_str(line)?)
}

/// Parses a bare value line
pub fn parse_value(line: &str) -> CliResult<Value> {
    let json: Json = serde_json::from_str(line)?;
    Ok(Value::from(json))
}

/// Builds the response for a conversion outcome.
///
/// Rejections still carry the converter's value under `data`.
pub fn conversion_response(coerced: &Coerced<Value>) -> Json {
    match coerced.error() {
        None => json!({
            "status": "ok",
            "data": coerced.value.to_json()
        }),
        Some(err) => rejection_response(err, &coerced.value),
    }
}

fn rejection_response(err: &ConvError, value: &Value) -> Json {
    json!({
        "status": "error",
        "code": err.code().code(),
        "message": err.to_string(),
        "data": value.to_json()
    })
}

/// Builds an error response without data
pub fn error_response(code: &str, message: &str) -> Json {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Writes one response line
pub fn write_line<W: Write>(writer: &mut W, response: &Json) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, response)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::convert_str;

    #[test]
    fn test_parse_request_defaults() {
        let req = parse_request(r#"{"type": "url"}"#).unwrap();
        assert_eq!(req.tag, "url");
        assert!(req.table.is_none());
        assert!(req.value.is_null());
    }

    #[test]
    fn test_parse_request_requires_type() {
        assert!(parse_request(r#"{"value": 1}"#).is_err());
    }

    #[test]
    fn test_parse_value_extended_kinds() {
        let value = parse_value(r#"{"$thing": "person:tobie"}"#).unwrap();
        assert!(value.is_thing());
    }

    #[test]
    fn test_ok_response() {
        let c = convert_str("double", "", Value::from("3.7"));
        assert_eq!(conversion_response(&c), json!({ "status": "ok", "data": 3.7 }));
    }

    #[test]
    fn test_rejection_response_keeps_value() {
        let c = convert_str("url", "", Value::from("not a url"));
        assert_eq!(
            conversion_response(&c),
            json!({
                "status": "error",
                "code": "AERO_CONV_FORMAT_MISMATCH",
                "message": "Expected a URL, but found 'not a url'",
                "data": "not a url"
            })
        );
    }

    #[test]
    fn test_write_line() {
        let mut out = Vec::new();
        write_line(&mut out, &error_response("AERO_CLI_IO_ERROR", "bad")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Json = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed["code"], "AERO_CLI_IO_ERROR");
    }
}
