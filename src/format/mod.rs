//! String format validation for aeroconv
//!
//! Pure predicates over strings, plus one normalizing transform for email
//! addresses and the scalar parsers the numeric converters build on.
//!
//! # Principles
//!
//! - Predicates never allocate results and never fail
//! - Patterns are compiled once and shared across threads
//! - No trimming: surrounding whitespace is part of the input

mod email;
mod patterns;
mod scalar;

pub use email::{is_email, normalize_email};
pub use patterns::{
    is_base64, is_dns_name, is_hex_color, is_latitude, is_longitude, is_phone, is_rgb_color,
    is_url, is_uuid,
};
pub use scalar::{to_bool, to_float};
