//! Rounding Facades
//!
//! Discards a magnitude down to a context's precision and reports what was
//! lost through the context's flags and traps.
//!
//! Bit precision uses the bit accumulators; digit precision uses the decimal
//! digit accumulator. The retained magnitude is truncated; callers apply the
//! rounding mode using `last_discarded` and `older_discarded`.

use entities_numeric::{AdaptiveInteger, BigNumber};
use entities_rounding::{Flags, RoundingContext};
use tracing::trace;
use usecases_shift_accumulation::{BitShiftAccumulator, DigitShiftAccumulator, ShiftAccumulator};

use crate::error::FacadeError;

/// A magnitude after discarding, with the state rounding needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded {
    pub magnitude: BigNumber,
    /// Positions (bits or digits) left in `magnitude`.
    pub length: u64,
    /// Exponent of the retained magnitude's last position.
    pub exponent: BigNumber,
    pub last_discarded: u8,
    pub older_discarded: u8,
    pub discarded_count: AdaptiveInteger,
}

impl Discarded {
    pub fn is_inexact(&self) -> bool {
        self.last_discarded != 0 || self.older_discarded != 0
    }
}

fn discard<A: ShiftAccumulator>(
    mut accumulator: A,
    precision: Option<u64>,
    exponent: &BigNumber,
) -> Discarded {
    if let Some(precision) = precision {
        accumulator.shift_to_length(precision);
    }
    let discarded_count = accumulator.discarded_count().clone();
    Discarded {
        magnitude: accumulator.shifted_magnitude(),
        length: accumulator.length(),
        exponent: exponent.plus(&discarded_count.as_big_integer()),
        last_discarded: accumulator.last_discarded(),
        older_discarded: accumulator.older_discarded(),
        discarded_count,
    }
}

/// Shift `magnitude × radix^exponent` down to the context's precision.
///
/// Raises `Rounded` when any position was discarded and `Inexact` when a
/// discarded position was nonzero. With an exponent range, a nonzero result
/// whose adjusted exponent is above the maximum raises `Overflow` (with
/// `Inexact` and `Rounded`); one below the minimum raises `Subnormal`, and
/// `Underflow` as well if it is also inexact. Below the smallest subnormal
/// exponent (see [`RoundingContext::exponent_within_range`]) the result
/// underflows outright: `Underflow`, `Inexact` and `Rounded` are raised, plus
/// `Clamped` when the context clamps exponents. The raised set goes through
/// [`RoundingContext::signal`].
///
/// # Errors
///
/// * `FacadeError::Numeric` if `magnitude` is negative
/// * `FacadeError::Trap` if a raised condition is trapped
pub fn discard_to_precision(
    context: &mut RoundingContext,
    magnitude: &BigNumber,
    exponent: &BigNumber,
) -> Result<Discarded, FacadeError> {
    let precision = context.precision_u64();
    let discarded = if context.is_precision_in_bits() {
        discard(BitShiftAccumulator::for_magnitude(magnitude)?, precision, exponent)
    } else {
        discard(DigitShiftAccumulator::new(magnitude)?, precision, exponent)
    };
    trace!(
        precision = ?precision,
        discarded = %discarded.discarded_count,
        "discarded to precision"
    );

    let mut raised = Flags::empty();
    if !discarded.discarded_count.is_zero() {
        raised |= Flags::ROUNDED;
    }
    if discarded.is_inexact() {
        raised |= Flags::INEXACT;
    }
    if let Some((emin, emax)) = context.exponent_range().filter(|_| !discarded.magnitude.is_zero()) {
        let adjusted = discarded
            .exponent
            .plus_i64(i64::try_from(discarded.length).unwrap_or(i64::MAX) - 1);
        if adjusted.as_integer() > emax {
            raised |= Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED;
        } else if adjusted.as_integer() < emin {
            raised |= Flags::SUBNORMAL;
            if !context.exponent_within_range(adjusted.as_integer()) {
                raised |= Flags::UNDERFLOW | Flags::INEXACT | Flags::ROUNDED;
                if context.clamp_normal_exponents() {
                    raised |= Flags::CLAMPED;
                }
            } else if raised.contains(Flags::INEXACT) {
                raised |= Flags::UNDERFLOW;
            }
        }
    }
    Ok(context.signal(raised, discarded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_numeric::NumericError;

    #[test]
    fn test_digit_precision() {
        let mut ctx = RoundingContext::for_precision(3);
        let result =
            discard_to_precision(&mut ctx, &BigNumber::from_i64(123_456), &BigNumber::ZERO).unwrap();
        assert_eq!(result.magnitude, BigNumber::from_i64(123));
        assert_eq!(result.exponent, BigNumber::from_i64(3));
        assert_eq!(result.last_discarded, 4);
        assert_eq!(result.older_discarded, 1);
        assert_eq!(ctx.flags(), Flags::ROUNDED | Flags::INEXACT);
    }

    #[test]
    fn test_bit_precision_exact() {
        let mut ctx = RoundingContext::unlimited().with_bit_length(4);
        let result =
            discard_to_precision(&mut ctx, &BigNumber::from_i64(0b1010_0000), &BigNumber::from_i64(-2))
                .unwrap();
        assert_eq!(result.magnitude, BigNumber::from_i64(0b1010));
        assert_eq!(result.exponent, BigNumber::from_i64(2));
        assert!(!result.is_inexact());
        assert_eq!(ctx.flags(), Flags::ROUNDED);
    }

    #[test]
    fn test_unlimited_precision_keeps_everything() {
        let mut ctx = RoundingContext::unlimited();
        let value = BigNumber::from_u64(u64::MAX).times_small(1000);
        let result = discard_to_precision(&mut ctx, &value, &BigNumber::ZERO).unwrap();
        assert_eq!(result.magnitude, value);
        assert!(result.discarded_count.is_zero());
        assert!(ctx.flags().is_empty());
    }

    #[test]
    fn test_negative_magnitude() {
        let mut ctx = RoundingContext::for_precision(3);
        let err = discard_to_precision(&mut ctx, &BigNumber::from_i64(-1), &BigNumber::ZERO)
            .unwrap_err();
        assert!(matches!(err, FacadeError::Numeric(NumericError::InvalidArgument { .. })));
    }

    #[test]
    fn test_overflow_and_subnormal() {
        let mut ctx = RoundingContext::decimal32();
        discard_to_precision(&mut ctx, &BigNumber::from_i64(1), &BigNumber::from_i64(97)).unwrap();
        assert!(ctx.flags().contains(Flags::OVERFLOW));

        let mut ctx = RoundingContext::decimal32();
        discard_to_precision(&mut ctx, &BigNumber::from_i64(15), &BigNumber::from_i64(-100))
            .unwrap();
        assert_eq!(ctx.flags(), Flags::SUBNORMAL);
    }

    #[test]
    fn test_below_smallest_subnormal_underflows() {
        let mut ctx = RoundingContext::decimal32();
        assert!(!ctx.exponent_within_range(&BigNumber::from_i64(-200).into_integer()));
        let result =
            discard_to_precision(&mut ctx, &BigNumber::from_i64(1), &BigNumber::from_i64(-200))
                .unwrap();
        assert_eq!(result.exponent, BigNumber::from_i64(-200));
        assert_eq!(
            ctx.flags(),
            Flags::SUBNORMAL | Flags::UNDERFLOW | Flags::INEXACT | Flags::ROUNDED | Flags::CLAMPED
        );

        // -101 is the smallest subnormal exponent for seven digits
        let mut ctx = RoundingContext::decimal32();
        discard_to_precision(&mut ctx, &BigNumber::from_i64(1), &BigNumber::from_i64(-101))
            .unwrap();
        assert_eq!(ctx.flags(), Flags::SUBNORMAL);

        let mut ctx = RoundingContext::decimal32().with_exponent_clamp(false);
        discard_to_precision(&mut ctx, &BigNumber::from_i64(1), &BigNumber::from_i64(-102))
            .unwrap();
        assert_eq!(
            ctx.flags(),
            Flags::SUBNORMAL | Flags::UNDERFLOW | Flags::INEXACT | Flags::ROUNDED
        );
    }

    #[test]
    fn test_trapped_inexact() {
        let mut ctx = RoundingContext::basic();
        let err = discard_to_precision(&mut ctx, &BigNumber::from_i64(1_234_567_891), &BigNumber::ZERO)
            .unwrap_err();
        let trap = err.as_trap().unwrap();
        assert_eq!(trap.flag, Flags::INEXACT);
        assert_eq!(trap.result.magnitude, BigNumber::from_i64(123_456_789));
        assert!(trap.context.flags().contains(Flags::ROUNDED));
        assert!(ctx.flags().contains(Flags::ROUNDED));
    }
}
