//! Observability subsystem for aeroconv
//!
//! Structured JSON-lines logging of conversion runs.
//!
//! # Principles
//!
//! 1. Observability is read-only: it never changes a conversion result
//! 2. Synchronous, no background threads
//! 3. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use aeroconv::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ConvertRejected, &[("tag", "url")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
