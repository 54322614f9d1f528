//! Scalar parsers

/// Parses a 64-bit float.
///
/// Accepts decimal and exponent forms plus `inf`/`infinity`/`nan` in any
/// case. Surrounding whitespace is rejected.
pub fn to_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Parses a boolean literal.
///
/// Accepted: `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn to_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_float() {
        assert_eq!(to_float("3.7"), Some(3.7));
        assert_eq!(to_float("-2"), Some(-2.0));
        assert_eq!(to_float("1e3"), Some(1000.0));
        assert_eq!(to_float("+.5"), Some(0.5));
        assert_eq!(to_float("inf"), Some(f64::INFINITY));
        assert!(to_float("NaN").map(f64::is_nan).unwrap_or(false));
    }

    #[test]
    fn test_to_float_rejects() {
        assert_eq!(to_float(""), None);
        assert_eq!(to_float(" 3.7"), None);
        assert_eq!(to_float("3.7abc"), None);
        assert_eq!(to_float("three"), None);
    }

    #[test]
    fn test_to_bool() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(to_bool(s), Some(true), "{}", s);
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(to_bool(s), Some(false), "{}", s);
        }
    }

    #[test]
    fn test_to_bool_rejects() {
        assert_eq!(to_bool("yes"), None);
        assert_eq!(to_bool("tRuE"), None);
        assert_eq!(to_bool("nonsense"), None);
        assert_eq!(to_bool(""), None);
    }
}
