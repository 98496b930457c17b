//! Rational Number Operations Module
//!
//! Arbitrary precision rational numbers, one of the numeric representations
//! that the dispatch layer normalizes.
//!
//! # Implementation Details
//!
//! This module uses the `malachite` crate's `Rational` type. Values are kept
//! in lowest terms with a positive denominator; the sign lives on the
//! numerator.
//!
//! # Examples
//!
//! ```rust
//! use entities_numeric::BigRational;
//!
//! let a = BigRational::from_i64(1);
//! let b = BigRational::from_i64(3);
//! let third = a.div(&b).unwrap();
//!
//! let sum = third.plus(&third).plus(&third);
//! assert!(sum.is_integral());
//! ```

use std::cmp::Ordering;
use std::fmt;

use malachite::base::num::arithmetic::traits::Abs;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use malachite::{Integer, Rational};

use crate::big::BigNumber;
use crate::error::NumericError;

/// Big rational number representation using malachite's Rational.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigRational {
    value: Rational,
}

impl BigRational {
    /// Create a new rational number from a 64-bit signed integer.
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Rational::from(value),
        }
    }

    /// Create a new rational number from a 64-bit unsigned integer.
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Rational::from(value),
        }
    }

    /// Exact rational value of a finite double.
    ///
    /// # Returns
    ///
    /// * `Some(BigRational)` if the value is finite
    /// * `None` for NaN or infinity
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numeric::BigRational;
    ///
    /// let r = BigRational::from_f64(0.5).unwrap();
    /// assert_eq!(r.to_string(), "1/2");
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            value: Rational::try_from(value).ok()?,
        })
    }

    /// Create a rational number from a numerator and denominator.
    ///
    /// Returns `None` if the denominator is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numeric::BigRational;
    ///
    /// let r = BigRational::from_fraction(22, 7);
    /// assert_eq!(r.unwrap().to_string(), "22/7");
    /// ```
    pub fn from_fraction(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self {
            value: Rational::from(numerator) / Rational::from(denominator),
        })
    }

    /// Create a rational number from big numerator and denominator.
    pub fn from_big_fraction(
        numerator: &BigNumber,
        denominator: &BigNumber,
    ) -> Result<Self, NumericError> {
        if denominator.is_zero() {
            return Err(NumericError::invalid_argument("rational denominator is zero"));
        }
        Ok(Self {
            value: Rational::from_integers(
                numerator.as_integer().clone(),
                denominator.as_integer().clone(),
            ),
        })
    }

    /// Signed numerator in lowest terms.
    pub fn numerator(&self) -> BigNumber {
        let magnitude = Integer::from(self.value.numerator_ref().clone());
        if self.is_negative() {
            BigNumber::from_integer(-magnitude)
        } else {
            BigNumber::from_integer(magnitude)
        }
    }

    /// Denominator in lowest terms; always positive.
    pub fn denominator(&self) -> BigNumber {
        BigNumber::from(self.value.denominator_ref().clone())
    }

    /// Add two rational numbers.
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two rational numbers.
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two rational numbers.
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two rational numbers.
    ///
    /// Returns `None` on division by zero.
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.value == Rational::ZERO {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Get the absolute value of a rational number.
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.clone().abs(),
        }
    }

    /// Negate a rational number.
    pub fn neg(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Compare two rational numbers.
    pub fn comp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Nearest double, ties to even.
    pub fn to_f64(&self) -> f64 {
        let (result, _ordering) = f64::rounding_from(&self.value, RoundingMode::Nearest);
        result
    }

    /// Nearest single, ties to even.
    pub fn to_f32(&self) -> f32 {
        let (result, _ordering) = f32::rounding_from(&self.value, RoundingMode::Nearest);
        result
    }

    /// Integer part, truncated toward zero.
    pub fn truncate(&self) -> BigNumber {
        let (integer, _ordering) = Integer::rounding_from(&self.value, RoundingMode::Down);
        BigNumber::from_integer(integer)
    }

    /// Check if the rational number is zero.
    pub fn is_zero(&self) -> bool {
        self.value == Rational::ZERO
    }

    /// Check if the rational number is positive.
    pub fn is_positive(&self) -> bool {
        self.value > Rational::ZERO
    }

    /// Check if the rational number is negative.
    pub fn is_negative(&self) -> bool {
        self.value < Rational::ZERO
    }

    pub fn sign(&self) -> i32 {
        match self.value.cmp(&Rational::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// True when the denominator is one or divides the numerator.
    pub fn is_integral(&self) -> bool {
        let denominator = self.value.denominator_ref();
        *denominator == 1u32 || self.value.numerator_ref() % denominator == 0u32
    }

    /// Get access to the underlying `malachite::Rational` value.
    pub fn as_rational(&self) -> &Rational {
        &self.value
    }

    /// Create a `BigRational` from a `malachite::Rational` value.
    pub fn from_rational(value: Rational) -> Self {
        Self { value }
    }
}

impl From<BigNumber> for BigRational {
    fn from(value: BigNumber) -> Self {
        Self {
            value: Rational::from(value.into_integer()),
        }
    }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i64() {
        let r = BigRational::from_i64(42);
        assert_eq!(r.to_string(), "42");
        assert!(r.is_integral());
    }

    #[test]
    fn test_from_fraction() {
        let r = BigRational::from_fraction(22, 7).unwrap();
        assert_eq!(r.to_string(), "22/7");
        assert!(!r.is_integral());
        assert!(BigRational::from_fraction(1, 0).is_none());
    }

    #[test]
    fn test_is_integral_reduces() {
        assert!(!BigRational::from_fraction(7, 2).unwrap().is_integral());
        assert!(BigRational::from_fraction(6, 2).unwrap().is_integral());
        assert!(BigRational::from_fraction(-6, 3).unwrap().is_integral());
        assert!(BigRational::from_i64(0).is_integral());
    }

    #[test]
    fn test_from_big_fraction() {
        let numerator = BigNumber::from_u64(u64::MAX).times_small(4);
        let denominator = BigNumber::from_i64(-2);
        let r = BigRational::from_big_fraction(&numerator, &denominator).unwrap();
        assert!(r.is_negative());
        assert_eq!(r.numerator(), BigNumber::from_u64(u64::MAX).times_small(2).neg());
        assert_eq!(r.denominator(), BigNumber::from_i64(1));

        assert!(matches!(
            BigRational::from_big_fraction(&numerator, &BigNumber::ZERO),
            Err(NumericError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_numerator_and_denominator_signs() {
        let r = BigRational::from_fraction(3, -9).unwrap();
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_arithmetic() {
        let a = BigRational::from_i64(1);
        let b = BigRational::from_i64(3);
        let third = a.div(&b).unwrap();

        let sum = third.plus(&third).plus(&third);
        assert_eq!(sum, BigRational::from_i64(1));
        assert_eq!(a.minus(&third).times(&b), BigRational::from_i64(2));
        assert!(a.div(&BigRational::from_i64(0)).is_none());
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(BigRational::from_f64(0.25).unwrap().to_string(), "1/4");
        assert!(BigRational::from_f64(f64::NAN).is_none());
        assert!(BigRational::from_f64(f64::INFINITY).is_none());
        assert!(BigRational::from_f64(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn test_conversions() {
        let r = BigRational::from_fraction(-7, 2).unwrap();
        assert_eq!(r.to_f64(), -3.5);
        assert_eq!(r.to_f32(), -3.5);
        assert_eq!(r.truncate().to_i64(), Some(-3));
        assert_eq!(BigRational::from_fraction(7, 2).unwrap().truncate().to_i64(), Some(3));
    }

    #[test]
    fn test_abs_neg_sign() {
        let r = BigRational::from_fraction(-1, 2).unwrap();
        assert_eq!(r.sign(), -1);
        assert_eq!(r.abs().sign(), 1);
        assert_eq!(r.neg(), r.abs());
        assert_eq!(BigRational::from_i64(0).sign(), 0);
    }

    #[test]
    fn test_compare() {
        let a = BigRational::from_i64(1);
        let b = BigRational::from_i64(2);
        assert_eq!(a.comp(&b), Ordering::Less);
        assert_eq!(b.comp(&a), Ordering::Greater);
        assert_eq!(a.comp(&a), Ordering::Equal);
    }
}
