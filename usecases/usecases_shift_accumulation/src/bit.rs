//! Bit Accumulator Selection
//!
//! Picks the machine-word accumulator when the magnitude fits in a `u64` and
//! the arbitrary-precision one otherwise, then forwards every call.

use entities_numeric::{AdaptiveInteger, BigNumber, NumericError};

use crate::accumulator::ShiftAccumulator;
use crate::big::BigBitShiftAccumulator;
use crate::small::SmallBitShiftAccumulator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitShiftAccumulator {
    Small(SmallBitShiftAccumulator),
    Big(BigBitShiftAccumulator),
}

macro_rules! forward {
    ($self:ident, $acc:ident => $body:expr) => {
        match $self {
            BitShiftAccumulator::Small($acc) => $body,
            BitShiftAccumulator::Big($acc) => $body,
        }
    };
}

impl BitShiftAccumulator {
    /// Fails with `InvalidArgument` if `magnitude` is negative.
    pub fn for_magnitude(magnitude: &BigNumber) -> Result<Self, NumericError> {
        if magnitude.is_negative() {
            return Err(NumericError::invalid_argument(format!(
                "magnitude {magnitude} is negative"
            )));
        }
        Ok(match magnitude.to_u64() {
            Some(small) => Self::Small(SmallBitShiftAccumulator::new(small)),
            None => Self::Big(BigBitShiftAccumulator::new(magnitude)?),
        })
    }

    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big(_))
    }

    /// Discard bits until the bit length is at most `target`.
    pub fn shift_to_bits(&mut self, target: u64) {
        self.shift_to_length(target);
    }

    pub fn bit_leftmost(&self) -> u8 {
        self.last_discarded()
    }

    pub fn bits_after_leftmost(&self) -> u8 {
        self.older_discarded()
    }

    pub fn discarded_bit_count(&self) -> &AdaptiveInteger {
        self.discarded_count()
    }
}

impl ShiftAccumulator for BitShiftAccumulator {
    fn shift_right_int(&mut self, amount: i64) {
        forward!(self, acc => acc.shift_right_int(amount))
    }

    fn fold_into_zero(&mut self, amount: &AdaptiveInteger) {
        forward!(self, acc => acc.fold_into_zero(amount))
    }

    fn shift_to_length(&mut self, target: u64) {
        forward!(self, acc => acc.shift_to_length(target))
    }

    fn length(&self) -> u64 {
        forward!(self, acc => acc.length())
    }

    fn shifted_magnitude(&self) -> BigNumber {
        forward!(self, acc => acc.shifted_magnitude())
    }

    fn last_discarded(&self) -> u8 {
        forward!(self, acc => acc.last_discarded())
    }

    fn older_discarded(&self) -> u8 {
        forward!(self, acc => acc.older_discarded())
    }

    fn discarded_count(&self) -> &AdaptiveInteger {
        forward!(self, acc => acc.discarded_count())
    }

    fn is_shifted_zero(&self) -> bool {
        forward!(self, acc => acc.is_shifted_zero())
    }
}
