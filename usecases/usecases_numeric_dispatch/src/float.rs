//! Float Helpers
//!
//! Truncation and decomposition shared by the single and double kinds.
//! Singles widen to doubles exactly, so everything works on `f64`.

use entities_numeric::NumericError;

/// 2^63 as a double; the exclusive upper bound of the i64 range.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// 2^31 as a double.
const TWO_POW_31: f64 = 2_147_483_648.0;

pub(crate) fn is_integral(value: f64) -> bool {
    value.is_finite() && value.trunc() == value
}

fn truncated(operation: &'static str, value: f64) -> Result<f64, NumericError> {
    if value.is_nan() {
        return Err(NumericError::unrepresentable(operation, "NaN"));
    }
    if value.is_infinite() {
        return Err(NumericError::unrepresentable(operation, "infinity"));
    }
    Ok(value.trunc())
}

pub(crate) fn truncated_fits_in_i64(value: f64) -> bool {
    value.is_finite() && value.trunc() >= -TWO_POW_63 && value.trunc() < TWO_POW_63
}

pub(crate) fn truncated_fits_in_i32(value: f64) -> bool {
    value.is_finite() && value.trunc() >= -TWO_POW_31 && value.trunc() < TWO_POW_31
}

/// Truncate toward zero, failing for NaN, infinity and values outside i64.
pub(crate) fn to_i64(value: f64) -> Result<i64, NumericError> {
    let integer = truncated("as_i64", value)?;
    if integer >= -TWO_POW_63 && integer < TWO_POW_63 {
        Ok(integer as i64)
    } else {
        Err(NumericError::unrepresentable(
            "as_i64",
            format!("{value} is outside the i64 range"),
        ))
    }
}

pub(crate) fn to_i32(value: f64) -> Result<i32, NumericError> {
    let integer = truncated("as_i32", value)?;
    if integer >= -TWO_POW_31 && integer < TWO_POW_31 {
        Ok(integer as i32)
    } else {
        Err(NumericError::unrepresentable(
            "as_i32",
            format!("{value} is outside the i32 range"),
        ))
    }
}

/// Exponent of `value` written as `mantissa × 2^exponent` with an odd
/// integer mantissa. Zero has exponent 0.
pub(crate) fn binary_exponent(value: f64) -> Result<i64, NumericError> {
    if !value.is_finite() {
        return Err(NumericError::unrepresentable(
            "exponent",
            format!("{value} has no exponent"),
        ));
    }
    if value == 0.0 {
        return Ok(0);
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7FF) as i64;
    let mut mantissa = bits & ((1u64 << 52) - 1);
    let exponent = if biased == 0 {
        -1074
    } else {
        mantissa |= 1u64 << 52;
        biased - 1075
    };
    Ok(exponent + i64::from(mantissa.trailing_zeros()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_i64_truncates() {
        assert_eq!(to_i64(-2.9), Ok(-2));
        assert_eq!(to_i64(2.9), Ok(2));
        assert_eq!(to_i64(-TWO_POW_63), Ok(i64::MIN));
        assert!(to_i64(TWO_POW_63).is_err());
        assert!(to_i64(f64::NAN).is_err());
        assert!(to_i64(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_to_i32_range() {
        assert_eq!(to_i32(2_147_483_647.9), Ok(i32::MAX));
        assert_eq!(to_i32(-2_147_483_648.5), Ok(i32::MIN));
        assert!(to_i32(TWO_POW_31).is_err());
    }

    #[test]
    fn test_truncated_fits() {
        assert!(truncated_fits_in_i64(-0.5));
        assert!(!truncated_fits_in_i64(f64::INFINITY));
        assert!(truncated_fits_in_i32(-2_147_483_648.9));
        assert!(!truncated_fits_in_i32(2_147_483_648.0));
    }

    #[test]
    fn test_binary_exponent() {
        assert_eq!(binary_exponent(1.5), Ok(-1));
        assert_eq!(binary_exponent(8.0), Ok(3));
        assert_eq!(binary_exponent(-0.0), Ok(0));
        assert_eq!(binary_exponent(f64::from_bits(1)), Ok(-1074));
        assert!(binary_exponent(f64::NAN).is_err());
    }
}
