//! API Facades Layer
//!
//! Entry points that tie the inner layers together:
//! - Discarding a magnitude to a context's precision, with flags and traps
//! - Encoding and decoding numbers of any kind as CBOR integers
//!
//! The inner layers' main types are re-exported so that most callers need
//! only this crate.

pub mod error;
pub mod number_facades;
pub mod rounding_facades;

pub use error::FacadeError;
pub use number_facades::*;
pub use rounding_facades::*;

pub use entities_numeric::{
    AdaptiveInteger, BigNumber, BigRational, ExtendedFraction, FractionKind, NumericError, Radix,
};
pub use entities_rounding::{Flags, Rounding, RoundingContext, TrapError};
pub use infrastructure_bignum_encoding::{BignumCodec, DecodeError, EncodeError};
pub use usecases_numeric_dispatch::{NumericKind, NumericValue};
pub use usecases_shift_accumulation::{
    BigBitShiftAccumulator, BitShiftAccumulator, DigitShiftAccumulator, ShiftAccumulator,
    SmallBitShiftAccumulator,
};
