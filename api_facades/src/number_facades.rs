//! Number Facades
//!
//! Moves numeric values of any kind to and from the CBOR integer encoding.

use entities_numeric::NumericError;
use infrastructure_bignum_encoding::BignumCodec;
use usecases_numeric_dispatch::NumericValue;

use crate::error::FacadeError;

/// Encode an integral value of any kind as a CBOR integer or bignum.
///
/// # Errors
///
/// * `FacadeError::Numeric` if the value has a fractional part or is not
///   finite
pub fn encode_number(value: &NumericValue) -> Result<Vec<u8>, FacadeError> {
    if !value.is_integral() {
        return Err(NumericError::unrepresentable(
            "encode_number",
            format!("{} value is not an integer", value.kind()),
        )
        .into());
    }
    Ok(BignumCodec::encode(&value.as_big_integer()?)?)
}

/// Decode one CBOR integer or bignum. Values within the i64 range come back
/// as the native integer kind.
pub fn decode_number(data: &[u8]) -> Result<(NumericValue, usize), FacadeError> {
    let (value, consumed) = BignumCodec::decode(data)?;
    Ok((NumericValue::from(value), consumed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numeric::{BigNumber, BigRational, ExtendedFraction};

    #[test]
    fn test_encode_integral_kinds() {
        assert_eq!(encode_number(&NumericValue::Integer(-1)).unwrap(), vec![0x20]);
        assert_eq!(encode_number(&NumericValue::Double(24.0)).unwrap(), vec![0x18, 24]);
        assert_eq!(
            encode_number(&NumericValue::Fraction(ExtendedFraction::decimal(5, 1))).unwrap(),
            vec![0x18, 50]
        );
        assert_eq!(
            encode_number(&NumericValue::Rational(BigRational::from_fraction(-10, 5).unwrap()))
                .unwrap(),
            vec![0x21]
        );
    }

    #[test]
    fn test_encode_rejects_fractions() {
        for value in [
            NumericValue::Double(0.5),
            NumericValue::Single(f32::NAN),
            NumericValue::Rational(BigRational::from_fraction(1, 3).unwrap()),
        ] {
            assert!(matches!(
                encode_number(&value),
                Err(FacadeError::Numeric(NumericError::Unrepresentable { .. }))
            ));
        }
    }

    #[test]
    fn test_decode_number_kinds() {
        assert_eq!(decode_number(&[0x20]).unwrap(), (NumericValue::Integer(-1), 1));
        let (value, consumed) = decode_number(&[0xC2, 0x49, 1, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(value, NumericValue::BigInteger(BigNumber::from_u64(u64::MAX).plus_i64(1)));
        assert_eq!(consumed, 11);
        assert!(matches!(decode_number(&[0xF6]), Err(FacadeError::Decode(_))));
    }
}
