//! Entities Layer: Numeric
//!
//! Provides the numeric scalars that every other layer builds on:
//! - Adaptive integers that start native and promote to arbitrary precision
//! - Big integer operations
//! - Big rationals
//! - Extended fractions (radix 2 or 10, with infinity and NaN)
//! - The shared numeric error type

pub mod adaptive_integer;
pub mod big;
pub mod error;
pub mod fraction;
pub mod rational;

pub use adaptive_integer::AdaptiveInteger;
pub use big::{BigNumber, MAX_SHIFT_PER_CALL};
pub use error::NumericError;
pub use fraction::{ExtendedFraction, FractionKind, Radix, MAX_MATERIALIZED_EXPONENT};
pub use rational::BigRational;
