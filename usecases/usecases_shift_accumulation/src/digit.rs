//! Decimal Digit Accumulator
//!
//! Radix-10 counterpart of the bit accumulators: discards low-order decimal
//! digits. `last_discarded` is the most significant digit dropped by the most
//! recent shift (0 through 9); `older_discarded` is 1 once any lower digit was
//! nonzero.

use malachite::base::num::arithmetic::traits::{DivMod, Pow};
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Natural;

use entities_numeric::{AdaptiveInteger, BigNumber, NumericError};

use crate::accumulator::ShiftAccumulator;

fn power_of_ten(exponent: u64) -> Natural {
    Natural::from(10u32).pow(exponent)
}

/// Decimal digit count of a nonzero `value`, estimated from its bit length
/// and then corrected against exact powers of ten.
fn digit_length(value: &Natural) -> u64 {
    let bits = value.significant_bits();
    if bits == 0 {
        return 0;
    }
    let mut digits = ((bits - 1) as f64 * std::f64::consts::LOG10_2) as u64 + 1;
    while digits > 1 && *value < power_of_ten(digits - 1) {
        digits -= 1;
    }
    while *value >= power_of_ten(digits) {
        digits += 1;
    }
    digits
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitShiftAccumulator {
    magnitude: Natural,
    last_digit: u8,
    older_digits: u8,
    discarded_digits: AdaptiveInteger,
}

impl DigitShiftAccumulator {
    /// Fails with `InvalidArgument` if `magnitude` is negative.
    pub fn new(magnitude: &BigNumber) -> Result<Self, NumericError> {
        Self::with_discarded(magnitude, 0, 0)
    }

    pub fn with_discarded(
        magnitude: &BigNumber,
        last_digit: u8,
        older_digits: u8,
    ) -> Result<Self, NumericError> {
        if last_digit > 9 || older_digits > 1 {
            return Err(NumericError::invalid_argument(
                "discarded digit must be 0-9 and the sticky flag 0 or 1",
            ));
        }
        let magnitude = Natural::try_from(magnitude.as_integer()).map_err(|_| {
            NumericError::invalid_argument(format!("magnitude {magnitude} is negative"))
        })?;
        Ok(Self {
            magnitude,
            last_digit,
            older_digits,
            discarded_digits: AdaptiveInteger::new(),
        })
    }

    /// Discard digits until at most `target` remain.
    pub fn shift_to_digits(&mut self, target: u64) {
        self.shift_to_length(target);
    }
}

impl ShiftAccumulator for DigitShiftAccumulator {
    fn shift_right_int(&mut self, amount: i64) {
        if amount <= 0 {
            return;
        }
        if self.magnitude == 0u32 {
            self.older_digits |= u8::from(self.last_digit != 0);
            self.last_digit = 0;
            self.discarded_digits.add(amount);
            return;
        }
        let length = digit_length(&self.magnitude);
        let digits = amount.unsigned_abs();
        self.older_digits |= u8::from(self.last_digit != 0);
        if digits > length {
            self.older_digits = 1;
            self.last_digit = 0;
            self.magnitude = Natural::ZERO;
        } else {
            let (rest, lower) = (&self.magnitude).div_mod(power_of_ten(digits - 1));
            if lower != 0u32 {
                self.older_digits = 1;
            }
            let (retained, digit) = rest.div_mod(Natural::from(10u32));
            self.last_digit = u8::try_from(&digit).unwrap_or(0);
            self.magnitude = retained;
        }
        self.discarded_digits.add(amount);
    }

    fn fold_into_zero(&mut self, amount: &AdaptiveInteger) {
        self.older_digits |= u8::from(self.last_digit != 0);
        self.last_digit = 0;
        amount.add_this_to(&mut self.discarded_digits);
    }

    fn shift_to_length(&mut self, target: u64) {
        let length = digit_length(&self.magnitude);
        if length > target {
            // A digit count is far below i64::MAX for any value that fits in memory.
            self.shift_right_int(i64::try_from(length - target).unwrap_or(i64::MAX));
        }
    }

    fn length(&self) -> u64 {
        digit_length(&self.magnitude)
    }

    fn shifted_magnitude(&self) -> BigNumber {
        BigNumber::from(self.magnitude.clone())
    }

    fn last_discarded(&self) -> u8 {
        self.last_digit
    }

    fn older_discarded(&self) -> u8 {
        self.older_digits
    }

    fn discarded_count(&self) -> &AdaptiveInteger {
        &self.discarded_digits
    }

    fn is_shifted_zero(&self) -> bool {
        self.magnitude == 0u32
    }
}
