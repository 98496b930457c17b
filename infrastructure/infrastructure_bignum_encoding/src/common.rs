//! Common Encoding/Decoding Utilities
//!
//! CBOR data item heads and the codec error types.
//!
//! ## Head Format
//!
//! Every data item starts with one byte: the major type in the top three bits
//! and "additional information" in the low five. Values below 24 are the
//! argument itself; 24, 25, 26 and 27 announce a 1, 2, 4 or 8 byte
//! big-endian argument; 31 marks an indefinite length.
//!
//! ## See Also
//!
//! - [`bignum_codec`](super::bignum_codec/index.html): Integer codec built on
//!   these heads

use thiserror::Error;

/// Non-negative integer.
pub const MAJOR_UNSIGNED: u8 = 0;
/// Negative integer, stored as `-1 - argument`.
pub const MAJOR_NEGATIVE: u8 = 1;
pub const MAJOR_BYTE_STRING: u8 = 2;
pub const MAJOR_TAG: u8 = 6;

/// Tag for a non-negative bignum.
pub const TAG_POSITIVE_BIGNUM: u64 = 2;
/// Tag for a negative bignum.
pub const TAG_NEGATIVE_BIGNUM: u64 = 3;

const ADDITIONAL_ONE_BYTE: u8 = 24;
const ADDITIONAL_TWO_BYTES: u8 = 25;
const ADDITIONAL_FOUR_BYTES: u8 = 26;
const ADDITIONAL_EIGHT_BYTES: u8 = 27;
const ADDITIONAL_INDEFINITE: u8 = 31;

/// Terminates an indefinite-length item.
pub const BREAK: u8 = 0xFF;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Output buffer cannot hold the encoded item
    #[error("buffer too small: need {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },
    /// Magnitude length does not fit a CBOR head
    #[error("value too large to encode")]
    ValueTooLarge,
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended inside a data item
    #[error("buffer too short")]
    BufferTooShort,
    /// Well-formed CBOR that is not a valid integer encoding, or malformed
    /// CBOR
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// The item is not an integer, bignum tag or byte string where one is
    /// required
    #[error("unexpected major type {found}")]
    UnexpectedMajorType { found: u8 },
    /// A declared length does not fit in memory addressing
    #[error("length {0} overflows the address space")]
    LengthOverflow(u64),
}

/// Decoded item head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    pub major: u8,
    /// `None` for indefinite length.
    pub argument: Option<u64>,
}

/// Bytes needed for a head carrying `argument`.
pub fn head_size(argument: u64) -> usize {
    match argument {
        0..=23 => 1,
        24..=0xFF => 2,
        0x100..=0xFFFF => 3,
        0x1_0000..=0xFFFF_FFFF => 5,
        _ => 9,
    }
}

/// Append the shortest head for `major` and `argument`.
pub fn write_head(buf: &mut Vec<u8>, major: u8, argument: u64) {
    let initial = major << 5;
    match argument {
        0..=23 => buf.push(initial | argument as u8),
        24..=0xFF => {
            buf.push(initial | ADDITIONAL_ONE_BYTE);
            buf.push(argument as u8);
        }
        0x100..=0xFFFF => {
            buf.push(initial | ADDITIONAL_TWO_BYTES);
            buf.extend_from_slice(&(argument as u16).to_be_bytes());
        }
        0x1_0000..=0xFFFF_FFFF => {
            buf.push(initial | ADDITIONAL_FOUR_BYTES);
            buf.extend_from_slice(&(argument as u32).to_be_bytes());
        }
        _ => {
            buf.push(initial | ADDITIONAL_EIGHT_BYTES);
            buf.extend_from_slice(&argument.to_be_bytes());
        }
    }
}

fn take<'a>(data: &'a [u8], index: &mut usize, count: usize) -> Result<&'a [u8], DecodeError> {
    let end = index.checked_add(count).ok_or(DecodeError::BufferTooShort)?;
    let bytes = data.get(*index..end).ok_or(DecodeError::BufferTooShort)?;
    *index = end;
    Ok(bytes)
}

/// Read one head at `*index`, advancing past it. Non-minimal argument
/// encodings are accepted.
pub fn read_head(data: &[u8], index: &mut usize) -> Result<Head, DecodeError> {
    let initial = take(data, index, 1)?[0];
    let major = initial >> 5;
    let additional = initial & 0x1F;
    let argument = match additional {
        0..=23 => Some(u64::from(additional)),
        ADDITIONAL_ONE_BYTE => Some(u64::from(take(data, index, 1)?[0])),
        ADDITIONAL_TWO_BYTES => {
            let bytes = take(data, index, 2)?;
            Some(u64::from(u16::from_be_bytes([bytes[0], bytes[1]])))
        }
        ADDITIONAL_FOUR_BYTES => {
            let bytes = take(data, index, 4)?;
            Some(u64::from(u32::from_be_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ])))
        }
        ADDITIONAL_EIGHT_BYTES => {
            let mut word = [0u8; 8];
            word.copy_from_slice(take(data, index, 8)?);
            Some(u64::from_be_bytes(word))
        }
        ADDITIONAL_INDEFINITE => None,
        reserved => {
            return Err(DecodeError::InvalidFormat(format!(
                "reserved additional information {reserved}"
            )))
        }
    };
    Ok(Head { major, argument })
}

/// Read a byte string of definite or indefinite length starting at `*index`.
pub fn read_byte_string(data: &[u8], index: &mut usize) -> Result<Vec<u8>, DecodeError> {
    let head = read_head(data, index)?;
    if head.major != MAJOR_BYTE_STRING {
        return Err(DecodeError::UnexpectedMajorType { found: head.major });
    }
    match head.argument {
        Some(length) => Ok(read_definite(data, index, length)?.to_vec()),
        None => {
            let mut bytes = Vec::new();
            loop {
                if *data.get(*index).ok_or(DecodeError::BufferTooShort)? == BREAK {
                    *index += 1;
                    return Ok(bytes);
                }
                let chunk = read_head(data, index)?;
                match (chunk.major, chunk.argument) {
                    (MAJOR_BYTE_STRING, Some(length)) => {
                        bytes.extend_from_slice(read_definite(data, index, length)?)
                    }
                    (MAJOR_BYTE_STRING, None) => {
                        return Err(DecodeError::InvalidFormat(
                            "nested indefinite byte string".to_string(),
                        ))
                    }
                    (found, _) => return Err(DecodeError::UnexpectedMajorType { found }),
                }
            }
        }
    }
}

fn read_definite<'a>(
    data: &'a [u8],
    index: &mut usize,
    length: u64,
) -> Result<&'a [u8], DecodeError> {
    let length = usize::try_from(length).map_err(|_| DecodeError::LengthOverflow(length))?;
    take(data, index, length)
}
