//! Dynamic value model for aeroconv
//!
//! Values arrive untyped, decoded from generic document rows. The
//! converters only need three capabilities from this module:
//!
//! - Kind checks (`is_array`, `is_object`, `is_datetime`, `is_thing`, ...)
//! - A total, deterministic display rendering (`Display for Value`)
//! - The table identifier of a typed record reference (`Thing::table`)
//!
//! JSON interop lives in `json`, with two extended single-key objects
//! (`$datetime`, `$thing`) for the kinds plain JSON cannot express.

mod json;
mod render;
mod types;

pub use types::{Thing, Value};
