//! aeroconv - A strict, deterministic, schema-directed value coercion engine
//!
//! Untyped values in, values of a known type out, or an error naming the
//! expected type and the offending input.

pub mod cli;
pub mod conv;
pub mod format;
pub mod observability;
pub mod value;
