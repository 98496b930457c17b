//! Big Number Operations
//!
//! Arbitrary-precision integer primitive consumed by the rest of the
//! workspace: sign test, add/subtract, multiply by a small constant, bounded
//! shifts, bit queries, masking with a constant and comparison.
//!
//! This module uses the `malachite` crate for the arithmetic itself. The
//! wire codec and the bit accumulators work purely through `BigNumber`;
//! decimal digit arithmetic and rounding contexts use malachite's `Natural`
//! and `Integer` directly.

use std::cmp::Ordering;
use std::fmt;

use malachite::base::num::arithmetic::traits::{DivisibleByPowerOf2, Sign, UnsignedAbs};
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::{PowerOf2Digits, RoundingFrom};
use malachite::base::num::logic::traits::{BitAccess, SignificantBits};
use malachite::base::rounding_modes::RoundingMode;
use malachite::{Integer, Natural};

use crate::error::NumericError;

/// Largest shift count accepted by a single call to [`BigNumber::shift_left`]
/// or [`BigNumber::shift_right`]. Callers with larger counts must split them.
pub const MAX_SHIFT_PER_CALL: u64 = 1_000_000;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    pub const ZERO: Self = Self {
        value: Integer::ZERO,
    };

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a big number from a double by truncating toward zero.
    ///
    /// Returns None for NaN and the infinities.
    pub fn from_f64_truncated(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let (value, _) = Integer::rounding_from(value, RoundingMode::Down);
        Some(Self { value })
    }

    /// Build a non-negative big number from big-endian magnitude bytes.
    /// Leading zero bytes are permitted.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let magnitude =
            <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(8, bytes.iter().copied())
                .unwrap_or(Natural::ZERO);
        Self {
            value: Integer::from(magnitude),
        }
    }

    /// Sign of the number: -1, 0 or 1.
    pub fn sign(&self) -> i32 {
        match self.value.sign() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Number of significant bits in the absolute value; zero has length 0.
    pub fn bit_length(&self) -> u64 {
        (&self.value).significant_bits()
    }

    /// Bit `index` of the two's complement representation.
    pub fn bit(&self, index: u64) -> bool {
        self.value.get_bit(index)
    }

    /// True when the low `bits` bits are all zero.
    pub fn is_divisible_by_power_of_2(&self, bits: u64) -> bool {
        (&self.value).divisible_by_power_of_2(bits)
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Add a machine integer: x + y
    pub fn plus_i64(&self, y: i64) -> Self {
        Self {
            value: &self.value + Integer::from(y),
        }
    }

    /// Multiply by a small constant: x * y
    pub fn times_small(&self, y: u32) -> Self {
        Self {
            value: &self.value * Integer::from(y),
        }
    }

    /// Arithmetic negation: -x
    pub fn neg(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Absolute value: |x|
    pub fn abs(&self) -> Self {
        Self {
            value: Integer::from((&self.value).unsigned_abs()),
        }
    }

    /// Left shift by a bounded count.
    pub fn shift_left(&self, bits: u64) -> Result<Self, NumericError> {
        check_shift_count(bits)?;
        Ok(Self {
            value: &self.value << bits,
        })
    }

    /// Right shift by a bounded count. Negative values round toward negative
    /// infinity, matching two's complement semantics.
    pub fn shift_right(&self, bits: u64) -> Result<Self, NumericError> {
        check_shift_count(bits)?;
        Ok(Self {
            value: &self.value >> bits,
        })
    }

    /// Low 64 bits of the value ANDed with `mask`. Only defined for
    /// non-negative values.
    pub fn and_u64(&self, mask: u64) -> Result<u64, NumericError> {
        if self.is_negative() {
            return Err(NumericError::invalid_argument(
                "mask requested for a negative big number",
            ));
        }
        let masked = &self.value & Integer::from(mask);
        u64::try_from(&masked)
            .map_err(|_| NumericError::unrepresentable("and_u64", "masked value exceeds u64"))
    }

    /// Bitwise OR with a machine constant: x | y
    pub fn or_u64(&self, y: u64) -> Self {
        Self {
            value: &self.value | Integer::from(y),
        }
    }

    /// Compare two big numbers (signed comparison)
    pub fn comp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Nearest double, ties to even.
    pub fn to_f64(&self) -> f64 {
        let (value, _) = f64::rounding_from(&self.value, RoundingMode::Nearest);
        value
    }

    /// Nearest single, ties to even.
    pub fn to_f32(&self) -> f32 {
        let (value, _) = f32::rounding_from(&self.value, RoundingMode::Nearest);
        value
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    pub fn into_integer(self) -> Integer {
        self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

fn check_shift_count(bits: u64) -> Result<(), NumericError> {
    if bits > MAX_SHIFT_PER_CALL {
        return Err(NumericError::invalid_argument(format!(
            "shift count {bits} exceeds the per-call limit of {MAX_SHIFT_PER_CALL}"
        )));
    }
    Ok(())
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<Natural> for BigNumber {
    fn from(value: Natural) -> Self {
        Self::from_integer(Integer::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_number_creation() {
        let big = BigNumber::from_i64(12345);
        assert_eq!(big.sign(), 1);
        assert!(!big.is_zero());

        let big_neg = BigNumber::from_i64(-12345);
        assert_eq!(big_neg.sign(), -1);
        assert!(BigNumber::ZERO.is_zero());
        assert_eq!(BigNumber::ZERO.sign(), 0);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(50);

        assert_eq!(a.plus(&b).to_i64(), Some(150));
        assert_eq!(a.minus(&b).to_i64(), Some(50));
        assert_eq!(a.times_small(10).to_i64(), Some(1000));
        assert_eq!(a.plus_i64(-101).to_i64(), Some(-1));
        assert_eq!(a.neg().to_i64(), Some(-100));
        assert_eq!(a.neg().abs(), a);
    }

    #[test]
    fn test_shift_operations() {
        let a = BigNumber::from_i64(10);

        assert_eq!(a.shift_left(2).unwrap().to_i64(), Some(40));
        assert_eq!(a.shift_right(1).unwrap().to_i64(), Some(5));
        assert_eq!(BigNumber::from_i64(-5).shift_right(1).unwrap().to_i64(), Some(-3));
    }

    #[test]
    fn test_shift_count_is_bounded() {
        let a = BigNumber::from_i64(1);
        assert!(a.shift_left(MAX_SHIFT_PER_CALL).is_ok());
        assert!(matches!(
            a.shift_left(MAX_SHIFT_PER_CALL + 1),
            Err(NumericError::InvalidArgument { .. })
        ));
        assert!(a.shift_right(MAX_SHIFT_PER_CALL + 1).is_err());
    }

    #[test]
    fn test_mask_operations() {
        let a = BigNumber::from_u64(u64::MAX).shift_left(8).unwrap().or_u64(0xAB);
        assert_eq!(a.and_u64(0xFF).unwrap(), 0xAB);
        assert_eq!(a.and_u64(0xFF00).unwrap(), 0xFF00);
        assert!(BigNumber::from_i64(-1).and_u64(1).is_err());
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(BigNumber::ZERO.bit_length(), 0);
        assert_eq!(BigNumber::from_i64(1).bit_length(), 1);
        assert_eq!(BigNumber::from_i64(9).bit_length(), 4);
        assert_eq!(BigNumber::from_i64(-9).bit_length(), 4);
        assert_eq!(BigNumber::from_u64(u64::MAX).bit_length(), 64);
    }

    #[test]
    fn test_from_bytes_be() {
        let two_64 = BigNumber::from_i64(1).shift_left(64).unwrap();
        assert_eq!(BigNumber::from_bytes_be(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), two_64);
        assert_eq!(BigNumber::from_bytes_be(&[0, 0, 0x12, 0x34]).to_i64(), Some(0x1234));
        assert!(BigNumber::from_bytes_be(&[]).is_zero());
    }

    #[test]
    fn test_bit_queries() {
        let a = BigNumber::from_i64(0b1011_0000);
        assert!(a.bit(4));
        assert!(!a.bit(6));
        assert!(!a.bit(200));
        assert!(a.is_divisible_by_power_of_2(4));
        assert!(!a.is_divisible_by_power_of_2(5));

        let wide = BigNumber::from_i64(1).shift_left(100).unwrap().plus_i64(1);
        assert!(wide.bit(100));
        assert!(wide.bit(0));
        assert!(!wide.is_divisible_by_power_of_2(1));
        assert!(BigNumber::ZERO.is_divisible_by_power_of_2(1000));
    }

    #[test]
    fn test_comparison() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(50);

        assert_eq!(a.comp(&b), Ordering::Greater);
        assert_eq!(b.comp(&a), Ordering::Less);
        assert_eq!(a.comp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_conversion() {
        assert_eq!(BigNumber::from_i64(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(BigNumber::from_u64(u64::MAX).to_i64(), None);
        assert_eq!(BigNumber::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigNumber::from_i64(-1).to_u64(), None);
        assert_eq!(BigNumber::from_i64(3).to_f64(), 3.0);
    }

    #[test]
    fn test_from_f64_truncated() {
        assert_eq!(BigNumber::from_f64_truncated(123.9).unwrap().to_i64(), Some(123));
        assert_eq!(BigNumber::from_f64_truncated(-123.9).unwrap().to_i64(), Some(-123));
        let big = BigNumber::from_f64_truncated(1e20).unwrap();
        assert_eq!(big.to_string(), "100000000000000000000");
        assert!(BigNumber::from_f64_truncated(f64::NAN).is_none());
        assert!(BigNumber::from_f64_truncated(f64::INFINITY).is_none());
    }
}
