//! Coercion results
//!
//! A conversion always produces a value, even when it fails. Which value
//! accompanies an error depends on the converter family:
//!
//! - numeric, boolean, structural, record, datetime, string: the zero value
//! - format-validated strings: the rendered (unvalidated) input
//! - geo: the best-effort float parse
//!
//! Only the `error` field says whether the value is valid.

use super::errors::{ConvError, ConvResult};

/// A coerced value and the error, if coercion failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced<T> {
    /// Coerced value, or the converter's failure value
    pub value: T,
    /// Set when the input did not conform
    pub error: Option<ConvError>,
}

impl<T> Coerced<T> {
    /// A successful conversion
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// A failed conversion carrying its failure value
    pub fn failed(value: T, error: ConvError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    /// Returns true if the conversion succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true if the conversion failed
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the error if the conversion failed
    pub fn error(&self) -> Option<&ConvError> {
        self.error.as_ref()
    }

    /// Splits into the value and the optional error
    pub fn into_parts(self) -> (T, Option<ConvError>) {
        (self.value, self.error)
    }

    /// Discards the failure value
    pub fn into_result(self) -> ConvResult<T> {
        match self.error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }

    /// Maps the value, keeping the error
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Coerced<U> {
        Coerced {
            value: f(self.value),
            error: self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok() {
        let c = Coerced::ok(3);
        assert!(c.is_ok());
        assert_eq!(c.into_result(), Ok(3));
    }

    #[test]
    fn test_failed_keeps_value() {
        let c = Coerced::failed("raw".to_string(), ConvError::mismatch("a URL", "raw"));
        assert!(c.is_err());
        let (value, error) = c.into_parts();
        assert_eq!(value, "raw");
        assert!(error.is_some());
    }

    #[test]
    fn test_into_result_discards_value() {
        let c = Coerced::failed(0.0, ConvError::mismatch("a number", "x"));
        assert!(c.into_result().is_err());
    }

    #[test]
    fn test_map_keeps_error() {
        let c = Coerced::failed(2, ConvError::mismatch("a number", "x")).map(|n| n * 2);
        assert_eq!(c.value, 4);
        assert!(c.is_err());
    }
}
