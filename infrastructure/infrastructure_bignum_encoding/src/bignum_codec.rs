//! Bignum Codec Module
//!
//! Encodes arbitrary-precision integers as CBOR: major type 0 or 1 when the
//! sign-adjusted magnitude fits in 64 bits, otherwise tag 2 or 3 around a
//! byte string holding the minimal big-endian magnitude.
//!
//! Negative values are stored as `-(n + 1)`, so -1 is the single byte `0x20`
//! and `-2^64` still fits in a head.
//!
//! Magnitudes are moved through 56-bit chunks (seven bytes each) in both
//! directions.

use tracing::debug;

use entities_numeric::{BigNumber, NumericError};

use crate::common::{
    head_size, read_byte_string, read_head, write_head, DecodeError, EncodeError,
    MAJOR_BYTE_STRING, MAJOR_NEGATIVE, MAJOR_TAG, MAJOR_UNSIGNED, TAG_NEGATIVE_BIGNUM,
    TAG_POSITIVE_BIGNUM,
};

const CHUNK_BITS: u64 = 56;
const CHUNK_BYTES: usize = 7;
const CHUNK_MASK: u64 = (1 << CHUNK_BITS) - 1;

/// Sign-adjusted magnitude: `n` for non-negative values, `-(n + 1)` for
/// negative ones.
fn split_sign(value: &BigNumber) -> (bool, BigNumber) {
    if value.is_negative() {
        (true, value.plus_i64(1).abs())
    } else {
        (false, value.clone())
    }
}

/// Length in bytes of the minimal big-endian form of `magnitude`.
fn magnitude_byte_len(magnitude: &BigNumber) -> usize {
    magnitude.bit_length().div_ceil(8) as usize
}

/// Minimal big-endian bytes of `magnitude`, gathered 56 bits at a time from
/// the least significant end.
fn magnitude_bytes(magnitude: &BigNumber) -> Result<Vec<u8>, NumericError> {
    let mut chunks = Vec::new();
    let mut rest = magnitude.clone();
    while !rest.is_zero() {
        chunks.push(rest.and_u64(CHUNK_MASK)?);
        rest = rest.shift_right(CHUNK_BITS)?;
    }
    let mut bytes = Vec::with_capacity(chunks.len() * CHUNK_BYTES);
    for chunk in chunks.iter().rev() {
        bytes.extend_from_slice(&chunk.to_be_bytes()[8 - CHUNK_BYTES..]);
    }
    let leading_zeros = bytes.iter().take_while(|byte| **byte == 0).count();
    bytes.drain(..leading_zeros);
    Ok(bytes)
}

/// Magnitude of a big-endian byte string. Strings of up to seven bytes are
/// composed directly; longer ones are split into seven-byte groups from the
/// end and folded in from the most significant group.
fn magnitude_from_bytes(bytes: &[u8]) -> Result<BigNumber, NumericError> {
    if bytes.len() <= CHUNK_BYTES {
        return Ok(BigNumber::from_bytes_be(bytes));
    }
    bytes.rchunks(CHUNK_BYTES).rev().try_fold(BigNumber::ZERO, |acc, group| {
        let word = group
            .iter()
            .fold(0u64, |word, byte| (word << 8) | u64::from(*byte));
        Ok(acc.shift_left(CHUNK_BITS)?.or_u64(word))
    })
}

/// CBOR integer and bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Encode `value` as a CBOR integer or tagged bignum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numeric::BigNumber;
    /// use infrastructure_bignum_encoding::BignumCodec;
    ///
    /// let two_to_64 = BigNumber::from_u64(u64::MAX).plus_i64(1);
    /// let encoded = BignumCodec::encode(&two_to_64).unwrap();
    /// assert_eq!(encoded, [0xC2, 0x49, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// ```
    pub fn encode(value: &BigNumber) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(Self::encoded_size(value));
        Self::encode_to_vec(&mut buf, value)?;
        Ok(buf)
    }

    /// Append the encoding of `value` to `buf`, returning the bytes written.
    pub fn encode_to_vec(buf: &mut Vec<u8>, value: &BigNumber) -> Result<usize, EncodeError> {
        let start = buf.len();
        let (negative, magnitude) = split_sign(value);
        match magnitude.to_u64() {
            Some(small) => {
                let major = if negative { MAJOR_NEGATIVE } else { MAJOR_UNSIGNED };
                write_head(buf, major, small);
            }
            None => {
                let tag = if negative {
                    TAG_NEGATIVE_BIGNUM
                } else {
                    TAG_POSITIVE_BIGNUM
                };
                let bytes = magnitude_bytes(&magnitude).map_err(|_| EncodeError::ValueTooLarge)?;
                let length = u64::try_from(bytes.len()).map_err(|_| EncodeError::ValueTooLarge)?;
                write_head(buf, MAJOR_TAG, tag);
                write_head(buf, MAJOR_BYTE_STRING, length);
                buf.extend_from_slice(&bytes);
            }
        }
        Ok(buf.len() - start)
    }

    /// Encode into a fixed buffer at `*index`, advancing it.
    pub fn encode_into(
        buf: &mut [u8],
        index: &mut usize,
        value: &BigNumber,
    ) -> Result<usize, EncodeError> {
        let mut encoded = Vec::with_capacity(Self::encoded_size(value));
        let written = Self::encode_to_vec(&mut encoded, value)?;
        let available = buf.len().saturating_sub(*index);
        if written > available {
            return Err(EncodeError::BufferTooSmall {
                needed: written,
                available,
            });
        }
        buf[*index..*index + written].copy_from_slice(&encoded);
        *index += written;
        Ok(written)
    }

    /// Exact length of [`encode`](Self::encode)'s output.
    pub fn encoded_size(value: &BigNumber) -> usize {
        let (_, magnitude) = split_sign(value);
        match magnitude.to_u64() {
            Some(small) => head_size(small),
            None => {
                let bytes = magnitude_byte_len(&magnitude);
                head_size(TAG_POSITIVE_BIGNUM) + head_size(bytes as u64) + bytes
            }
        }
    }

    /// Decode one integer or bignum from the start of `data`.
    ///
    /// # Returns
    ///
    /// * `Ok((value, bytes_consumed))`
    /// * `Err(DecodeError)` - truncated input, a non-integer item, or an
    ///   unsupported tag
    pub fn decode(data: &[u8]) -> Result<(BigNumber, usize), DecodeError> {
        let mut index = 0;
        match Self::decode_at(data, &mut index) {
            Ok(value) => Ok((value, index)),
            Err(err) => {
                debug!(error = %err, offset = index, "bignum decode failed");
                Err(err)
            }
        }
    }

    fn decode_at(data: &[u8], index: &mut usize) -> Result<BigNumber, DecodeError> {
        let head = read_head(data, index)?;
        let argument = match (head.major, head.argument) {
            (MAJOR_UNSIGNED | MAJOR_NEGATIVE | MAJOR_TAG, None) => {
                return Err(DecodeError::InvalidFormat(format!(
                    "major type {} cannot have indefinite length",
                    head.major
                )))
            }
            (_, Some(argument)) => argument,
            (found, None) => return Err(DecodeError::UnexpectedMajorType { found }),
        };
        match head.major {
            MAJOR_UNSIGNED => Ok(BigNumber::from_u64(argument)),
            MAJOR_NEGATIVE => Ok(BigNumber::from_i64(-1).minus(&BigNumber::from_u64(argument))),
            MAJOR_TAG => {
                if argument != TAG_POSITIVE_BIGNUM && argument != TAG_NEGATIVE_BIGNUM {
                    return Err(DecodeError::InvalidFormat(format!(
                        "tag {argument} is not a bignum tag"
                    )));
                }
                let bytes = read_byte_string(data, index)?;
                let magnitude = magnitude_from_bytes(&bytes)
                    .map_err(|err| DecodeError::InvalidFormat(err.to_string()))?;
                Ok(if argument == TAG_NEGATIVE_BIGNUM {
                    BigNumber::from_i64(-1).minus(&magnitude)
                } else {
                    magnitude
                })
            }
            found => Err(DecodeError::UnexpectedMajorType { found }),
        }
    }
}
