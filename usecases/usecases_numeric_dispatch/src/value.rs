//! Numeric Values
//!
//! `NumericValue` is a closed enum over every numeric representation. Each
//! capability is a single exhaustive `match`, so adding a representation
//! means answering every capability for it.
//!
//! # Examples
//!
//! ```rust
//! use usecases_numeric_dispatch::NumericValue;
//!
//! let value = NumericValue::Double(-2.75);
//! assert_eq!(value.as_i64().unwrap(), -2);
//! assert!(!value.is_integral());
//! assert!(value.can_truncated_int_fit_in_i32());
//! ```

use entities_numeric::{BigNumber, BigRational, ExtendedFraction, NumericError};

use crate::float;
use crate::kind::NumericKind;

/// Any finite or special number a CBOR data item can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Integer(i64),
    BigInteger(BigNumber),
    Single(f32),
    Double(f64),
    Fraction(ExtendedFraction),
    Rational(BigRational),
}

/// Extended fractions with an exponent above this have magnitude at least
/// 2^65 whenever the mantissa is nonzero.
const FRACTION_I64_EXPONENT_LIMIT: i64 = 64;

fn fraction_exceeds_i64(fraction: &ExtendedFraction) -> bool {
    !fraction.is_zero()
        && fraction.is_finite()
        && fraction
            .exponent()
            .comp(&BigNumber::from_i64(FRACTION_I64_EXPONENT_LIMIT))
            .is_gt()
}

fn big_to_i64(operation: &'static str, value: &BigNumber) -> Result<i64, NumericError> {
    value
        .to_i64()
        .ok_or_else(|| NumericError::unrepresentable(operation, format!("{value} exceeds i64")))
}

fn narrow_to_i32(operation: &'static str, value: i64) -> Result<i32, NumericError> {
    i32::try_from(value)
        .map_err(|_| NumericError::unrepresentable(operation, format!("{value} exceeds i32")))
}

impl NumericValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::Integer(_) => NumericKind::Integer,
            NumericValue::BigInteger(_) => NumericKind::BigInteger,
            NumericValue::Single(_) => NumericKind::Single,
            NumericValue::Double(_) => NumericKind::Double,
            NumericValue::Fraction(_) => NumericKind::Fraction,
            NumericValue::Rational(_) => NumericKind::Rational,
        }
    }

    /// -1, 0 or 1. Both zeros have sign 0; NaN has none.
    pub fn sign(&self) -> Result<i32, NumericError> {
        let float_sign = |value: f64| {
            if value.is_nan() {
                Err(NumericError::unrepresentable("sign", "NaN"))
            } else if value == 0.0 {
                Ok(0)
            } else if value < 0.0 {
                Ok(-1)
            } else {
                Ok(1)
            }
        };
        match self {
            NumericValue::Integer(value) => Ok(value.signum() as i32),
            NumericValue::BigInteger(value) => Ok(value.sign()),
            NumericValue::Single(value) => float_sign(f64::from(*value)),
            NumericValue::Double(value) => float_sign(*value),
            NumericValue::Fraction(value) => value
                .sign()
                .ok_or_else(|| NumericError::unrepresentable("sign", "NaN")),
            NumericValue::Rational(value) => Ok(value.sign()),
        }
    }

    /// True for either zero. NaN is not zero.
    pub fn is_zero(&self) -> bool {
        match self {
            NumericValue::Integer(value) => *value == 0,
            NumericValue::BigInteger(value) => value.is_zero(),
            NumericValue::Single(value) => *value == 0.0,
            NumericValue::Double(value) => *value == 0.0,
            NumericValue::Fraction(value) => value.is_zero(),
            NumericValue::Rational(value) => value.is_zero(),
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            NumericValue::Integer(_) | NumericValue::BigInteger(_) | NumericValue::Rational(_) => {
                true
            }
            NumericValue::Single(value) => value.is_finite(),
            NumericValue::Double(value) => value.is_finite(),
            NumericValue::Fraction(value) => value.is_finite(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        match self {
            NumericValue::Integer(_) | NumericValue::BigInteger(_) | NumericValue::Rational(_) => {
                false
            }
            NumericValue::Single(value) => value.is_infinite(),
            NumericValue::Double(value) => value.is_infinite(),
            NumericValue::Fraction(value) => value.is_infinity(),
        }
    }

    pub fn is_positive_infinity(&self) -> bool {
        self.is_infinity() && !self.is_sign_negative()
    }

    pub fn is_negative_infinity(&self) -> bool {
        self.is_infinity() && self.is_sign_negative()
    }

    pub fn is_nan(&self) -> bool {
        match self {
            NumericValue::Integer(_) | NumericValue::BigInteger(_) | NumericValue::Rational(_) => {
                false
            }
            NumericValue::Single(value) => value.is_nan(),
            NumericValue::Double(value) => value.is_nan(),
            NumericValue::Fraction(value) => value.is_nan(),
        }
    }

    /// State of the sign bit, which unlike [`sign`](Self::sign) separates
    /// the two zeros.
    pub fn is_sign_negative(&self) -> bool {
        match self {
            NumericValue::Integer(value) => *value < 0,
            NumericValue::BigInteger(value) => value.is_negative(),
            NumericValue::Single(value) => value.is_sign_negative(),
            NumericValue::Double(value) => value.is_sign_negative(),
            NumericValue::Fraction(value) => value.is_negative(),
            NumericValue::Rational(value) => value.is_negative(),
        }
    }

    pub fn is_negative_zero(&self) -> bool {
        self.is_zero() && self.is_sign_negative()
    }

    /// Finite with no fractional part.
    pub fn is_integral(&self) -> bool {
        match self {
            NumericValue::Integer(_) | NumericValue::BigInteger(_) => true,
            NumericValue::Single(value) => float::is_integral(f64::from(*value)),
            NumericValue::Double(value) => float::is_integral(*value),
            NumericValue::Fraction(value) => value.is_integral(),
            NumericValue::Rational(value) => value.is_integral(),
        }
    }

    /// Integer part, truncated toward zero.
    pub fn as_big_integer(&self) -> Result<BigNumber, NumericError> {
        let from_float = |value: f64| {
            if value.is_nan() {
                Err(NumericError::unrepresentable("as_big_integer", "NaN"))
            } else {
                BigNumber::from_f64_truncated(value)
                    .ok_or_else(|| NumericError::unrepresentable("as_big_integer", "infinity"))
            }
        };
        match self {
            NumericValue::Integer(value) => Ok(BigNumber::from_i64(*value)),
            NumericValue::BigInteger(value) => Ok(value.clone()),
            NumericValue::Single(value) => from_float(f64::from(*value)),
            NumericValue::Double(value) => from_float(*value),
            NumericValue::Fraction(value) => value.truncate(),
            NumericValue::Rational(value) => Ok(value.truncate()),
        }
    }

    /// Integer part as an i64, failing for NaN, infinity or out-of-range
    /// values.
    pub fn as_i64(&self) -> Result<i64, NumericError> {
        match self {
            NumericValue::Integer(value) => Ok(*value),
            NumericValue::BigInteger(value) => big_to_i64("as_i64", value),
            NumericValue::Single(value) => float::to_i64(f64::from(*value)),
            NumericValue::Double(value) => float::to_i64(*value),
            NumericValue::Fraction(value) => {
                if fraction_exceeds_i64(value) {
                    return Err(NumericError::unrepresentable(
                        "as_i64",
                        format!("{value} exceeds i64"),
                    ));
                }
                big_to_i64("as_i64", &value.truncate()?)
            }
            NumericValue::Rational(value) => big_to_i64("as_i64", &value.truncate()),
        }
    }

    pub fn as_i32(&self) -> Result<i32, NumericError> {
        match self {
            NumericValue::Single(value) => float::to_i32(f64::from(*value)),
            NumericValue::Double(value) => float::to_i32(*value),
            NumericValue::Integer(_)
            | NumericValue::BigInteger(_)
            | NumericValue::Fraction(_)
            | NumericValue::Rational(_) => {
                let wide = self.as_i64().map_err(|err| match err {
                    NumericError::Unrepresentable { reason, .. } => {
                        NumericError::unrepresentable("as_i32", reason)
                    }
                    other => other,
                })?;
                narrow_to_i32("as_i32", wide)
            }
        }
    }

    /// Nearest double, ties to even.
    pub fn as_f64(&self) -> f64 {
        match self {
            NumericValue::Integer(value) => *value as f64,
            NumericValue::BigInteger(value) => value.to_f64(),
            NumericValue::Single(value) => f64::from(*value),
            NumericValue::Double(value) => *value,
            NumericValue::Fraction(value) => value.to_f64(),
            NumericValue::Rational(value) => value.to_f64(),
        }
    }

    /// Nearest single, ties to even.
    pub fn as_f32(&self) -> f32 {
        match self {
            NumericValue::Integer(value) => *value as f32,
            NumericValue::BigInteger(value) => value.to_f32(),
            NumericValue::Single(value) => *value,
            NumericValue::Double(value) => *value as f32,
            NumericValue::Fraction(value) => value.to_f32(),
            NumericValue::Rational(value) => value.to_f32(),
        }
    }

    /// Integral and within the i64 range.
    pub fn can_fit_in_i64(&self) -> bool {
        self.is_integral() && self.can_truncated_int_fit_in_i64()
    }

    pub fn can_fit_in_i32(&self) -> bool {
        self.is_integral() && self.can_truncated_int_fit_in_i32()
    }

    /// Finite, and the integer part is within the i64 range.
    pub fn can_truncated_int_fit_in_i64(&self) -> bool {
        match self {
            NumericValue::Single(value) => float::truncated_fits_in_i64(f64::from(*value)),
            NumericValue::Double(value) => float::truncated_fits_in_i64(*value),
            NumericValue::Integer(_)
            | NumericValue::BigInteger(_)
            | NumericValue::Fraction(_)
            | NumericValue::Rational(_) => self.as_i64().is_ok(),
        }
    }

    pub fn can_truncated_int_fit_in_i32(&self) -> bool {
        match self {
            NumericValue::Single(value) => float::truncated_fits_in_i32(f64::from(*value)),
            NumericValue::Double(value) => float::truncated_fits_in_i32(*value),
            NumericValue::Integer(_)
            | NumericValue::BigInteger(_)
            | NumericValue::Fraction(_)
            | NumericValue::Rational(_) => self.as_i32().is_ok(),
        }
    }

    /// Exponent of the value in its own radix: 0 for integers, the base-2
    /// exponent (odd mantissa) for floats, the stored exponent for
    /// fractions. Rationals have no exponent.
    pub fn exponent(&self) -> Result<BigNumber, NumericError> {
        match self {
            NumericValue::Integer(_) | NumericValue::BigInteger(_) => Ok(BigNumber::ZERO),
            NumericValue::Single(value) => {
                float::binary_exponent(f64::from(*value)).map(BigNumber::from_i64)
            }
            NumericValue::Double(value) => float::binary_exponent(*value).map(BigNumber::from_i64),
            NumericValue::Fraction(value) => {
                if value.is_finite() {
                    Ok(value.exponent())
                } else {
                    Err(NumericError::unrepresentable(
                        "exponent",
                        format!("{value} has no exponent"),
                    ))
                }
            }
            NumericValue::Rational(_) => Err(NumericError::unsupported(
                "exponent",
                NumericKind::Rational.name(),
            )),
        }
    }

    /// Arithmetic negation. The i64 minimum has no i64 negation and comes
    /// back as a big integer; every other value keeps its kind.
    pub fn negate(&self) -> NumericValue {
        match self {
            NumericValue::Integer(value) => match value.checked_neg() {
                Some(negated) => NumericValue::Integer(negated),
                None => NumericValue::BigInteger(BigNumber::from_i64(*value).neg()),
            },
            NumericValue::BigInteger(value) => NumericValue::BigInteger(value.neg()),
            NumericValue::Single(value) => NumericValue::Single(-*value),
            NumericValue::Double(value) => NumericValue::Double(-*value),
            NumericValue::Fraction(value) => NumericValue::Fraction(value.negate()),
            NumericValue::Rational(value) => NumericValue::Rational(value.neg()),
        }
    }

    /// Absolute value, with the same i64 minimum exception as
    /// [`negate`](Self::negate).
    pub fn abs(&self) -> NumericValue {
        match self {
            NumericValue::Integer(value) => match value.checked_abs() {
                Some(absolute) => NumericValue::Integer(absolute),
                None => NumericValue::BigInteger(BigNumber::from_i64(*value).abs()),
            },
            NumericValue::BigInteger(value) => NumericValue::BigInteger(value.abs()),
            NumericValue::Single(value) => NumericValue::Single(value.abs()),
            NumericValue::Double(value) => NumericValue::Double(value.abs()),
            NumericValue::Fraction(value) => NumericValue::Fraction(value.abs()),
            NumericValue::Rational(value) => NumericValue::Rational(value.abs()),
        }
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Integer(value)
    }
}

/// Big integers that fit in an i64 become the native kind.
impl From<BigNumber> for NumericValue {
    fn from(value: BigNumber) -> Self {
        match value.to_i64() {
            Some(small) => NumericValue::Integer(small),
            None => NumericValue::BigInteger(value),
        }
    }
}

impl From<f32> for NumericValue {
    fn from(value: f32) -> Self {
        NumericValue::Single(value)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Double(value)
    }
}

impl From<ExtendedFraction> for NumericValue {
    fn from(value: ExtendedFraction) -> Self {
        NumericValue::Fraction(value)
    }
}

impl From<BigRational> for NumericValue {
    fn from(value: BigRational) -> Self {
        NumericValue::Rational(value)
    }
}
