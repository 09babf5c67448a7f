//! Error types for element and attribute operations.

use thiserror::Error;

/// Errors raised by guard clauses on element attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SvgError {
    #[error("{name} must be a positive number, got {value}")]
    NegativeDimension { name: &'static str, value: f64 },
    #[error("Invalid viewBox: {0:?}")]
    InvalidViewBox(String),
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),
    #[error("Invalid path data: {0}")]
    InvalidPathData(String),
    #[error("Expected <{expected}> element, found <{found}>")]
    UnexpectedTag {
        expected: &'static str,
        found: String,
    },
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Result type for element operations.
pub type SvgResult<T> = Result<T, SvgError>;

/// Reject negative lengths for attributes that cannot hold them.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> SvgResult<f64> {
    if value < 0.0 {
        return Err(SvgError::NegativeDimension { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("width", 0.0), Ok(0.0));
        assert_eq!(ensure_non_negative("width", 12.5), Ok(12.5));
        assert!(matches!(
            ensure_non_negative("height", -1.0),
            Err(SvgError::NegativeDimension { name: "height", .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = SvgError::UnexpectedTag {
            expected: "rect",
            found: "circle".to_string(),
        };
        assert_eq!(err.to_string(), "Expected <rect> element, found <circle>");

        let err = SvgError::NegativeDimension { name: "width", value: -2.0 };
        assert_eq!(err.to_string(), "width must be a positive number, got -2");
    }
}
