//! Value coercion engine for aeroconv
//!
//! Given an untyped value and a target type tag, produce a value known to
//! conform to that type, or report what was expected and what was found.
//!
//! # Design Principles
//!
//! - Closed vocabulary: tags are an enum, dispatch is an exhaustive match
//! - Unknown tags pass values through unchanged
//! - Every converter is a pure function of its input
//! - Errors are returned as data, never panics
//! - A failed conversion still yields a value (see `outcome`)
//!
//! # Usage
//!
//! ```
//! use aeroconv::conv::{convert, TypeTag};
//! use aeroconv::value::Value;
//!
//! let c = convert(&TypeTag::Number, "", Value::from("3.7"));
//! assert_eq!(c.value, Value::Float(3.0));
//! assert!(c.is_ok());
//! ```

mod dispatch;
mod errors;
mod geo;
mod numeric;
mod outcome;
mod record;
mod strings;
mod structural;
mod tag;

pub use dispatch::{convert, convert_str};
pub use errors::{ConvError, ConvErrorCode, ConvResult, Severity};
pub use geo::{to_latitude, to_longitude};
pub use numeric::{to_boolean, to_double, to_number};
pub use outcome::Coerced;
pub use record::to_record;
pub use strings::{
    to_base64, to_color, to_domain, to_email, to_phone, to_string, to_url, to_uuid,
};
pub use structural::{to_array, to_datetime, to_object};
pub use tag::TypeTag;
