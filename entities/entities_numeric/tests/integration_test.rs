//! Integration tests for entities_numeric crate
//!
//! These tests exercise adaptive integers, big numbers, rationals and
//! extended fractions together through the public API.

use entities_numeric::*;

#[test]
fn test_adaptive_integer_promotes_and_compares_by_value() {
    let mut counter = AdaptiveInteger::from_i64(i64::MAX);
    counter.increment();
    assert!(counter.is_big());
    assert_eq!(counter.as_big_integer(), BigNumber::from_i64(i64::MAX).plus_i64(1));
    assert!(!counter.can_fit_in_i64());

    counter.decrement();
    assert_eq!(counter.as_i64(), Ok(i64::MAX));
    assert_eq!(counter, AdaptiveInteger::from_i64(i64::MAX));
}

#[test]
fn test_adaptive_integer_decimal_accumulation() {
    // Build 12345678901234567890123 digit by digit.
    let digits = "12345678901234567890123";
    let mut value = AdaptiveInteger::new();
    for digit in digits.bytes() {
        value.multiply_by_ten().add(i64::from(digit - b'0'));
    }
    assert!(value.is_big());
    assert_eq!(value.to_string(), digits);
    assert!(value.as_i64().is_err());
}

#[test]
fn test_add_this_to_chains() {
    let delta = AdaptiveInteger::from_big(BigNumber::from_u64(u64::MAX));
    let mut total = AdaptiveInteger::from_i64(1);
    delta.add_this_to(&mut total).subtract(1);
    assert_eq!(total.as_big_integer(), BigNumber::from_u64(u64::MAX));

    delta.subtract_this_from(&mut total);
    assert!(total.is_zero());
}

#[test]
fn test_big_number_bytes() {
    let value = BigNumber::from_u64(u64::MAX).plus_i64(1);
    assert_eq!(BigNumber::from_bytes_be(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), value);
    assert_eq!(value.bit_length(), 65);
    assert!(value.bit(64));
    assert!(value.is_divisible_by_power_of_2(64));
}

#[test]
fn test_big_number_shift_limit() {
    let one = BigNumber::from_i64(1);
    assert!(one.shift_left(MAX_SHIFT_PER_CALL).is_ok());
    assert!(matches!(
        one.shift_left(MAX_SHIFT_PER_CALL + 1),
        Err(NumericError::InvalidArgument { .. })
    ));
}

#[test]
fn test_fraction_and_rational_agree() {
    let fraction = ExtendedFraction::decimal(-375, -3);
    let rational = BigRational::from_fraction(-3, 8).unwrap();
    assert_eq!(fraction.to_rational().unwrap(), rational);
    assert_eq!(fraction.to_f64(), rational.to_f64());
    assert_eq!(fraction.truncate().unwrap(), rational.truncate());
    assert_eq!(fraction.is_integral(), rational.is_integral());
}

#[test]
fn test_fraction_specials() {
    let infinity = ExtendedFraction::infinity(Radix::Binary, false);
    assert!(infinity.is_infinity());
    assert_eq!(infinity.negate().to_f64(), f64::NEG_INFINITY);
    assert!(matches!(
        infinity.truncate(),
        Err(NumericError::Unrepresentable { .. })
    ));

    let nan = ExtendedFraction::nan(Radix::Decimal);
    assert_eq!(nan.kind(), FractionKind::NaN);
    assert_eq!(nan.sign(), None);
    assert!(!nan.is_integral());
}
