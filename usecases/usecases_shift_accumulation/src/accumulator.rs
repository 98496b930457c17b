//! Shift Accumulator Contract
//!
//! A shift accumulator discards low-order positions (bits or decimal digits)
//! from a non-negative magnitude and remembers just enough about them to
//! round correctly afterwards:
//!
//! - `last_discarded`: the most significant position dropped by the most
//!   recent shift
//! - `older_discarded`: 1 if any position strictly below that one was ever
//!   nonzero (sticky)
//! - `discarded_count`: total positions requested so far

use std::cmp::Ordering;

use entities_numeric::{AdaptiveInteger, BigNumber, MAX_SHIFT_PER_CALL};
use tracing::trace;

const CHUNK: i64 = MAX_SHIFT_PER_CALL as i64;

pub trait ShiftAccumulator {
    /// Discard `amount` low-order positions. Amounts `<= 0` do nothing.
    fn shift_right_int(&mut self, amount: i64);

    /// Discard `amount` positions from a magnitude that is already zero:
    /// the last discarded position folds into the sticky state and the
    /// count grows by `amount`.
    fn fold_into_zero(&mut self, amount: &AdaptiveInteger);

    /// Discard positions until at most `target` remain.
    fn shift_to_length(&mut self, target: u64);

    /// Number of significant positions left in the magnitude.
    fn length(&self) -> u64;

    fn shifted_magnitude(&self) -> BigNumber;

    fn last_discarded(&self) -> u8;

    fn older_discarded(&self) -> u8;

    fn discarded_count(&self) -> &AdaptiveInteger;

    fn is_shifted_zero(&self) -> bool;

    /// Discard an arbitrarily large number of positions.
    ///
    /// The amount is applied in chunks of at most [`MAX_SHIFT_PER_CALL`]
    /// while the magnitude is nonzero; whatever remains once it reaches zero
    /// is folded in a single step.
    fn shift_right(&mut self, amount: &AdaptiveInteger) {
        if amount.sign() <= 0 {
            return;
        }
        if amount.compare_to_i64(CHUNK) != Ordering::Greater {
            if let Ok(small) = amount.as_i64() {
                self.shift_right_int(small);
            }
            return;
        }
        let mut remaining = amount.clone();
        while remaining.compare_to_i64(CHUNK) == Ordering::Greater && !self.is_shifted_zero() {
            self.shift_right_int(CHUNK);
            remaining.subtract(CHUNK);
        }
        if remaining.is_zero() {
            return;
        }
        if self.is_shifted_zero() {
            trace!(remaining = %remaining, "folding shift amount into zero magnitude");
            self.fold_into_zero(&remaining);
        } else if let Ok(small) = remaining.as_i64() {
            self.shift_right_int(small);
        }
    }
}
