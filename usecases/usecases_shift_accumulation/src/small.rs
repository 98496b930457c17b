//! Machine-Word Bit Accumulator
//!
//! Bit shift accumulator over a `u64` magnitude.

use entities_numeric::{AdaptiveInteger, BigNumber, NumericError};

use crate::accumulator::ShiftAccumulator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmallBitShiftAccumulator {
    magnitude: u64,
    bit_leftmost: u8,
    bits_after_leftmost: u8,
    discarded_bits: AdaptiveInteger,
}

impl SmallBitShiftAccumulator {
    pub fn new(magnitude: u64) -> Self {
        Self {
            magnitude,
            bit_leftmost: 0,
            bits_after_leftmost: 0,
            discarded_bits: AdaptiveInteger::new(),
        }
    }

    /// Start from a magnitude and the discarded state of an earlier shift.
    pub fn with_discarded(
        magnitude: u64,
        bit_leftmost: u8,
        bits_after_leftmost: u8,
    ) -> Result<Self, NumericError> {
        if bit_leftmost > 1 || bits_after_leftmost > 1 {
            return Err(NumericError::invalid_argument(
                "discarded bits must be 0 or 1",
            ));
        }
        Ok(Self {
            bit_leftmost,
            bits_after_leftmost,
            ..Self::new(magnitude)
        })
    }

    pub fn from_i64(magnitude: i64) -> Result<Self, NumericError> {
        u64::try_from(magnitude).map(Self::new).map_err(|_| {
            NumericError::invalid_argument(format!("magnitude {magnitude} is negative"))
        })
    }

    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    // Descending scan: count down from the top bit to the first set bit.
    fn bit_length(&self) -> u64 {
        u64::from(u64::BITS - self.magnitude.leading_zeros())
    }
}

impl ShiftAccumulator for SmallBitShiftAccumulator {
    fn shift_right_int(&mut self, amount: i64) {
        if amount <= 0 {
            return;
        }
        if self.magnitude == 0 {
            self.bits_after_leftmost |= self.bit_leftmost;
            self.bit_leftmost = 0;
            self.discarded_bits.add(amount);
            return;
        }
        let length = self.bit_length();
        let bits = amount.unsigned_abs();
        self.bits_after_leftmost |= self.bit_leftmost;
        if bits > length {
            self.bits_after_leftmost = 1;
            self.bit_leftmost = 0;
            self.magnitude = 0;
        } else {
            let below = bits - 1;
            if below > 0 && self.magnitude & ((1u64 << below) - 1) != 0 {
                self.bits_after_leftmost = 1;
            }
            self.bit_leftmost = ((self.magnitude >> below) & 1) as u8;
            self.magnitude = self.magnitude.checked_shr(bits as u32).unwrap_or(0);
        }
        self.discarded_bits.add(amount);
    }

    fn fold_into_zero(&mut self, amount: &AdaptiveInteger) {
        self.bits_after_leftmost |= self.bit_leftmost;
        self.bit_leftmost = 0;
        amount.add_this_to(&mut self.discarded_bits);
    }

    fn shift_to_length(&mut self, target: u64) {
        let length = self.bit_length();
        if length > target {
            // length <= 64, so the difference always fits.
            self.shift_right_int((length - target) as i64);
        }
    }

    fn length(&self) -> u64 {
        self.bit_length()
    }

    fn shifted_magnitude(&self) -> BigNumber {
        BigNumber::from_u64(self.magnitude)
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
        self.magnitude == 0
    }
}
