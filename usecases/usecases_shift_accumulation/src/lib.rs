//! Use Cases Layer: Shift Accumulation
//!
//! Discards low-order positions from a non-negative magnitude while keeping
//! the information rounding needs: the most significant discarded position,
//! a sticky flag for everything below it, and the total discarded count.
//!
//! ## Modules
//!
//! - **[`accumulator`](accumulator/index.html)**: The `ShiftAccumulator` trait
//!   and arbitrary-size shift decomposition
//! - **[`small`](small/index.html)**: Bit accumulator over a `u64`
//! - **[`big`](big/index.html)**: Bit accumulator over an arbitrary-precision
//!   magnitude
//! - **[`bit`](bit/index.html)**: Picks the small or big bit accumulator
//! - **[`digit`](digit/index.html)**: Decimal digit accumulator
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): Adaptive
//!   integers used for discarded counts

pub mod accumulator;
pub mod big;
pub mod bit;
pub mod digit;
pub mod small;

pub use accumulator::ShiftAccumulator;
pub use big::BigBitShiftAccumulator;
pub use bit::BitShiftAccumulator;
pub use digit::DigitShiftAccumulator;
pub use small::SmallBitShiftAccumulator;
