//! Conversion error types
//!
//! Error codes:
//! - AERO_CONV_FORMAT_MISMATCH (REJECT)
//!
//! There is a single taxonomy: the value did not have the expected form.
//! Malformed input and wrong shape are reported the same way, carrying the
//! expected type phrase and the rendered offending value.

use std::fmt;

use thiserror::Error;

/// Severity levels for conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The offending value is rejected; the caller decides what that aborts
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Conversion error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvErrorCode {
    /// Value does not match the target type
    AeroConvFormatMismatch,
}

impl ConvErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ConvErrorCode::AeroConvFormatMismatch => "AERO_CONV_FORMAT_MISMATCH",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for ConvErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Conversion failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvError {
    /// Expected type T, found value V
    #[error("Expected {expected}, but found '{found}'")]
    FormatMismatch {
        /// Expected type phrase, with article (e.g. "a URL")
        expected: String,
        /// Rendered offending value
        found: String,
    },
}

impl ConvError {
    /// Create a format mismatch error
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ConvError::FormatMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ConvErrorCode {
        match self {
            ConvError::FormatMismatch { .. } => ConvErrorCode::AeroConvFormatMismatch,
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code().severity()
    }

    /// Returns the expected type phrase
    pub fn expected(&self) -> &str {
        match self {
            ConvError::FormatMismatch { expected, .. } => expected,
        }
    }

    /// Returns the rendered offending value
    pub fn found(&self) -> &str {
        match self {
            ConvError::FormatMismatch { found, .. } => found,
        }
    }
}

/// Result type for conversions that discard the best-effort value
pub type ConvResult<T> = Result<T, ConvError>;
