//! Arbitrary-Precision Bit Accumulator
//!
//! Bit shift accumulator over a non-negative [`BigNumber`] magnitude.
//! Physical shifts are applied in chunks of at most [`MAX_SHIFT_PER_CALL`]
//! bits.

use tracing::trace;

use entities_numeric::{AdaptiveInteger, BigNumber, NumericError, MAX_SHIFT_PER_CALL};

use crate::accumulator::ShiftAccumulator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigBitShiftAccumulator {
    magnitude: BigNumber,
    bit_leftmost: u8,
    bits_after_leftmost: u8,
    discarded_bits: AdaptiveInteger,
}

impl BigBitShiftAccumulator {
    /// Fails with `InvalidArgument` if `magnitude` is negative.
    pub fn new(magnitude: &BigNumber) -> Result<Self, NumericError> {
        Self::with_discarded(magnitude, 0, 0)
    }

    pub fn with_discarded(
        magnitude: &BigNumber,
        bit_leftmost: u8,
        bits_after_leftmost: u8,
    ) -> Result<Self, NumericError> {
        if bit_leftmost > 1 || bits_after_leftmost > 1 {
            return Err(NumericError::invalid_argument(
                "discarded bits must be 0 or 1",
            ));
        }
        if magnitude.is_negative() {
            return Err(NumericError::invalid_argument(format!(
                "magnitude {magnitude} is negative"
            )));
        }
        Ok(Self {
            magnitude: magnitude.clone(),
            bit_leftmost,
            bits_after_leftmost,
            discarded_bits: AdaptiveInteger::new(),
        })
    }

    fn shift_magnitude(&mut self, bits: u64) {
        if bits > MAX_SHIFT_PER_CALL {
            trace!(bits, "chunked magnitude shift");
        }
        let mut remaining = bits;
        while remaining > 0 && !self.magnitude.is_zero() {
            let step = remaining.min(MAX_SHIFT_PER_CALL);
            match self.magnitude.shift_right(step) {
                Ok(shifted) => self.magnitude = shifted,
                Err(_) => break,
            }
            remaining -= step;
        }
    }
}

impl ShiftAccumulator for BigBitShiftAccumulator {
    fn shift_right_int(&mut self, amount: i64) {
        if amount <= 0 {
            return;
        }
        if self.magnitude.is_zero() {
            self.bits_after_leftmost |= self.bit_leftmost;
            self.bit_leftmost = 0;
            self.discarded_bits.add(amount);
            return;
        }
        let length = self.magnitude.bit_length();
        let bits = amount.unsigned_abs();
        self.bits_after_leftmost |= self.bit_leftmost;
        if bits > length {
            self.bits_after_leftmost = 1;
            self.bit_leftmost = 0;
            self.magnitude = BigNumber::ZERO;
        } else {
            let below = bits - 1;
            if !self.magnitude.is_divisible_by_power_of_2(below) {
                self.bits_after_leftmost = 1;
            }
            self.bit_leftmost = u8::from(self.magnitude.bit(below));
            self.shift_magnitude(bits);
        }
        self.discarded_bits.add(amount);
    }

    fn fold_into_zero(&mut self, amount: &AdaptiveInteger) {
        self.bits_after_leftmost |= self.bit_leftmost;
        self.bit_leftmost = 0;
        amount.add_this_to(&mut self.discarded_bits);
    }

    fn shift_to_length(&mut self, target: u64) {
        let length = self.magnitude.bit_length();
        if length <= target {
            return;
        }
        let excess = length - target;
        match i64::try_from(excess) {
            Ok(excess) => self.shift_right_int(excess),
            Err(_) => self.shift_right(&AdaptiveInteger::from_big(BigNumber::from_u64(excess))),
        }
    }

    fn length(&self) -> u64 {
        self.magnitude.bit_length()
    }

    fn shifted_magnitude(&self) -> BigNumber {
        self.magnitude.clone()
    }

    fn last_discarded(&self) -> u8 {
        self.bit_leftmost
    }

    fn older_discarded(&self) -> u8 {
        self.bits_after_leftmost
    }

    fn discarded_count(&self) -> &AdaptiveInteger {
        &self.discarded_bits
    }

    fn is_shifted_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}
