//! Infrastructure Layer: Bignum Encoding
//!
//! Provides CBOR encoding and decoding of arbitrary precision integers.
//!
//! ## Overview
//!
//! Integers whose sign-adjusted magnitude fits in 64 bits use CBOR major
//! types 0 and 1. Larger values use tag 2 (non-negative) or tag 3 (negative)
//! followed by a byte string with the minimal big-endian magnitude. Decoding
//! also accepts non-minimal heads and indefinite-length byte strings.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: Codec for arbitrary precision integers
//!   (bignum). Handles encoding and decoding of `BigNumber` types.
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): BigNumber type

mod common;

pub mod bignum_codec;

pub use bignum_codec::BignumCodec;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};
