//! Integration tests for usecases_numeric_dispatch crate
//!
//! These tests check that every kind answers the capability set
//! consistently for equal values.

use entities_numeric::{BigNumber, BigRational, ExtendedFraction, NumericError};
use proptest::prelude::*;
use usecases_numeric_dispatch::*;

fn every_kind_of_minus_six() -> Vec<NumericValue> {
    vec![
        NumericValue::Integer(-6),
        NumericValue::BigInteger(BigNumber::from_i64(-6)),
        NumericValue::Single(-6.0),
        NumericValue::Double(-6.0),
        NumericValue::Fraction(ExtendedFraction::decimal(-600, -2)),
        NumericValue::Rational(BigRational::from_fraction(12, -2).unwrap()),
    ]
}

#[test]
fn test_equal_values_answer_alike() {
    for value in every_kind_of_minus_six() {
        assert_eq!(value.sign(), Ok(-1), "{:?}", value.kind());
        assert!(value.is_integral());
        assert!(value.is_finite());
        assert!(!value.is_zero());
        assert_eq!(value.as_i64(), Ok(-6));
        assert_eq!(value.as_i32(), Ok(-6));
        assert_eq!(value.as_big_integer(), Ok(BigNumber::from_i64(-6)));
        assert_eq!(value.as_f64(), -6.0);
        assert_eq!(value.as_f32(), -6.0);
        assert!(value.can_fit_in_i32());
        assert_eq!(value.negate().as_i64(), Ok(6));
        assert_eq!(value.abs().kind(), value.kind());
    }
}

#[test]
fn test_only_rational_lacks_exponent() {
    for value in every_kind_of_minus_six() {
        match value.exponent() {
            Ok(_) => assert_ne!(value.kind(), NumericKind::Rational),
            Err(NumericError::Unsupported { operation, kind }) => {
                assert_eq!(operation, "exponent");
                assert_eq!(kind, NumericKind::Rational.name());
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_kind_display() {
    assert_eq!(NumericKind::Fraction.to_string(), "extended fraction");
    assert!(NumericKind::BigInteger.is_integer_kind());
    assert!(NumericKind::Single.is_float_kind());
}

proptest! {
    #[test]
    fn double_truncation_matches_cast(value in -1.0e18f64..1.0e18) {
        let numeric = NumericValue::Double(value);
        prop_assert_eq!(numeric.as_i64(), Ok(value.trunc() as i64));
        prop_assert!(numeric.can_truncated_int_fit_in_i64());
    }

    #[test]
    fn negate_twice_is_identity(value in any::<i64>()) {
        let numeric = NumericValue::Integer(value);
        prop_assert_eq!(numeric.negate().negate().as_big_integer(), Ok(BigNumber::from_i64(value)));
    }
}
