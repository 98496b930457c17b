//! Numeric Errors
//!
//! Error kinds shared by every numeric operation in the workspace. Trapped
//! rounding conditions carry a context snapshot and live in
//! `entities_rounding` instead.

use thiserror::Error;

/// Failure of a numeric query, conversion or construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// An argument violated a precondition (for example a negative magnitude
    /// handed to a shift accumulator).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The exact result cannot be expressed in the requested target, such as
    /// converting NaN or an out-of-range value to an integer.
    #[error("{operation}: result is not representable ({reason})")]
    Unrepresentable {
        operation: &'static str,
        reason: String,
    },

    /// The representation does not define the requested operation.
    #[error("{operation} is not supported for {kind} values")]
    Unsupported {
        operation: &'static str,
        kind: &'static str,
    },
}

impl NumericError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn unrepresentable(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Unrepresentable {
            operation,
            reason: reason.into(),
        }
    }

    pub fn unsupported(operation: &'static str, kind: &'static str) -> Self {
        Self::Unsupported { operation, kind }
    }

    /// True for the "this representation doesn't do that" case, as opposed to
    /// a range or argument failure.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = NumericError::invalid_argument("magnitude is negative");
        assert_eq!(err.to_string(), "invalid argument: magnitude is negative");

        let err = NumericError::unrepresentable("as_i64", "NaN");
        assert_eq!(err.to_string(), "as_i64: result is not representable (NaN)");

        let err = NumericError::unsupported("exponent", "rational");
        assert_eq!(err.to_string(), "exponent is not supported for rational values");
    }

    #[test]
    fn test_is_unsupported() {
        assert!(NumericError::unsupported("exponent", "rational").is_unsupported());
        assert!(!NumericError::unrepresentable("as_i32", "too large").is_unsupported());
        assert!(!NumericError::invalid_argument("x").is_unsupported());
    }
}
