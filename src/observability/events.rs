//! Observable events for aeroconv
//!
//! Events are explicit and typed. Converters never emit events; only the
//! command layer around them does.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// A conversion run began reading input
    BatchStart,
    /// A conversion run reached end of input
    BatchComplete,
    /// A value did not conform to its target type
    ConvertRejected,
    /// An input line was not a valid request
    RequestMalformed,
    /// A run stopped at the first rejection
    FailFastAbort,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BatchStart => "CONVERT_BATCH_START",
            Event::BatchComplete => "CONVERT_BATCH_COMPLETE",
            Event::ConvertRejected => "CONVERT_REJECTED",
            Event::RequestMalformed => "REQUEST_MALFORMED",
            Event::FailFastAbort => "CONVERT_FAIL_FAST_ABORT",
        }
    }

    /// Returns the severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded | Event::BatchStart | Event::BatchComplete => Severity::Info,
            Event::ConvertRejected | Event::RequestMalformed => Severity::Warn,
            Event::FailFastAbort => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
