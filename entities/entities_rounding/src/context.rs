//! Rounding Context
//!
//! Precision, rounding mode, exponent bounds, and the condition flags an
//! operation accumulates. Presets cover the IEEE 754 interchange formats;
//! `with_*` methods refine a preset by value.
//!
//! # Examples
//!
//! ```rust
//! use entities_rounding::{Flags, Rounding, RoundingContext};
//!
//! let mut ctx = RoundingContext::for_precision_and_rounding(5, Rounding::Down)
//!     .with_traps(Flags::OVERFLOW);
//!
//! assert_eq!(ctx.signal(Flags::ROUNDED, 42), Ok(42));
//! assert!(ctx.flags().contains(Flags::ROUNDED));
//!
//! let trap = ctx.signal(Flags::OVERFLOW, 43).unwrap_err();
//! assert_eq!(trap.flag, Flags::OVERFLOW);
//! assert_eq!(trap.result, 43);
//! ```

use malachite::base::num::basic::traits::Zero;
use malachite::Integer;
use tracing::debug;

use entities_numeric::NumericError;

use crate::flags::Flags;
use crate::rounding::Rounding;
use crate::trap::TrapError;

/// Arithmetic context: configuration plus the live flag set.
///
/// Cloning takes an independent snapshot; nothing is shared between clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundingContext {
    precision: Integer,
    precision_in_bits: bool,
    rounding: Rounding,
    exponent_range: Option<(Integer, Integer)>,
    clamp_normal_exponents: bool,
    has_flags: bool,
    flags: Flags,
    traps: Flags,
}

impl RoundingContext {
    /// Unlimited precision and exponent range, round half even, no traps.
    pub fn unlimited() -> Self {
        Self {
            precision: Integer::ZERO,
            precision_in_bits: false,
            rounding: Rounding::HalfEven,
            exponent_range: None,
            clamp_normal_exponents: false,
            has_flags: true,
            flags: Flags::empty(),
            traps: Flags::empty(),
        }
    }

    /// `precision` digits (0 = unlimited), round half even.
    pub fn for_precision(precision: u64) -> Self {
        Self::unlimited().with_precision(precision)
    }

    pub fn for_precision_and_rounding(precision: u64, rounding: Rounding) -> Self {
        Self::for_precision(precision).with_rounding(rounding)
    }

    fn interchange(precision: u64, in_bits: bool, emin: i64, emax: i64) -> Self {
        let base = if in_bits {
            Self::unlimited().with_bit_length(precision)
        } else {
            Self::unlimited().with_precision(precision)
        };
        Self {
            exponent_range: Some((Integer::from(emin), Integer::from(emax))),
            clamp_normal_exponents: true,
            ..base
        }
    }

    /// IEEE 754 binary16: 11 bits, exponents -14..=15.
    pub fn binary16() -> Self {
        Self::interchange(11, true, -14, 15)
    }

    /// IEEE 754 binary32: 24 bits, exponents -126..=127.
    pub fn binary32() -> Self {
        Self::interchange(24, true, -126, 127)
    }

    /// IEEE 754 binary64: 53 bits, exponents -1022..=1023.
    pub fn binary64() -> Self {
        Self::interchange(53, true, -1022, 1023)
    }

    /// IEEE 754 binary128: 113 bits, exponents -16382..=16383.
    pub fn binary128() -> Self {
        Self::interchange(113, true, -16382, 16383)
    }

    /// IEEE 754 decimal32: 7 digits, exponents -95..=96.
    pub fn decimal32() -> Self {
        Self::interchange(7, false, -95, 96)
    }

    /// IEEE 754 decimal64: 16 digits, exponents -383..=384.
    pub fn decimal64() -> Self {
        Self::interchange(16, false, -383, 384)
    }

    /// IEEE 754 decimal128: 34 digits, exponents -6143..=6144.
    pub fn decimal128() -> Self {
        Self::interchange(34, false, -6143, 6144)
    }

    /// General decimal arithmetic "basic" context: 9 digits, round half up,
    /// trapping the conditions that indicate a wrong answer.
    pub fn basic() -> Self {
        Self::for_precision_and_rounding(9, Rounding::HalfUp).with_traps(
            Flags::INEXACT | Flags::INVALID | Flags::OVERFLOW | Flags::DIVIDE_BY_ZERO,
        )
    }

    /// Decimal context used by command line tools: 34 digits, no traps.
    pub fn cli_decimal() -> Self {
        Self::for_precision_and_rounding(34, Rounding::HalfEven)
    }

    /// Precision in decimal digits.
    pub fn with_precision(self, precision: u64) -> Self {
        Self {
            precision: Integer::from(precision),
            precision_in_bits: false,
            ..self
        }
    }

    /// Precision in bits.
    pub fn with_bit_length(self, bits: u64) -> Self {
        Self {
            precision: Integer::from(bits),
            precision_in_bits: true,
            ..self
        }
    }

    /// Arbitrary-size precision; keeps the current digit/bit unit.
    pub fn with_big_precision(self, precision: Integer) -> Result<Self, NumericError> {
        if precision < 0 {
            return Err(NumericError::invalid_argument(format!(
                "precision {precision} is negative"
            )));
        }
        Ok(Self { precision, ..self })
    }

    pub fn with_rounding(self, rounding: Rounding) -> Self {
        Self { rounding, ..self }
    }

    /// Bound adjusted exponents to `emin..=emax`.
    pub fn with_exponent_range(
        self,
        emin: impl Into<Integer>,
        emax: impl Into<Integer>,
    ) -> Result<Self, NumericError> {
        let (emin, emax) = (emin.into(), emax.into());
        if emin > emax {
            return Err(NumericError::invalid_argument(format!(
                "exponent range {emin}..={emax} is empty"
            )));
        }
        Ok(Self {
            exponent_range: Some((emin, emax)),
            ..self
        })
    }

    pub fn with_unlimited_exponents(self) -> Self {
        Self {
            exponent_range: None,
            ..self
        }
    }

    /// Replace the trap set.
    pub fn with_traps(self, traps: Flags) -> Self {
        Self { traps, ..self }
    }

    /// Track flags, starting from an empty set.
    pub fn with_blank_flags(self) -> Self {
        Self {
            has_flags: true,
            flags: Flags::empty(),
            ..self
        }
    }

    /// Stop tracking flags. Traps still fire.
    pub fn with_no_flags(self) -> Self {
        Self {
            has_flags: false,
            flags: Flags::empty(),
            ..self
        }
    }

    pub fn with_exponent_clamp(self, clamp: bool) -> Self {
        Self {
            clamp_normal_exponents: clamp,
            ..self
        }
    }

    pub fn precision(&self) -> &Integer {
        &self.precision
    }

    /// Precision as a machine count, when limited and small enough.
    pub fn precision_u64(&self) -> Option<u64> {
        if !self.has_max_precision() {
            return None;
        }
        u64::try_from(&self.precision).ok()
    }

    pub fn is_precision_in_bits(&self) -> bool {
        self.precision_in_bits
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn exponent_range(&self) -> Option<(&Integer, &Integer)> {
        self.exponent_range.as_ref().map(|(emin, emax)| (emin, emax))
    }

    pub fn clamp_normal_exponents(&self) -> bool {
        self.clamp_normal_exponents
    }

    pub fn has_flags(&self) -> bool {
        self.has_flags
    }

    /// False for precision 0, which means unlimited.
    pub fn has_max_precision(&self) -> bool {
        self.precision != 0
    }

    pub fn has_exponent_range(&self) -> bool {
        self.exponent_range.is_some()
    }

    /// Whether a result with adjusted exponent `exponent` can be
    /// represented. With a limited precision, subnormal exponents down to
    /// `emin - (precision - 1)` are allowed.
    pub fn exponent_within_range(&self, exponent: &Integer) -> bool {
        let Some((emin, emax)) = &self.exponent_range else {
            return true;
        };
        if exponent > emax {
            return false;
        }
        if self.has_max_precision() {
            let tiny = emin - (&self.precision - Integer::from(1u32));
            *exponent >= tiny
        } else {
            exponent >= emin
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn traps(&self) -> Flags {
        self.traps
    }

    pub fn is_trapped(&self, flag: Flags) -> bool {
        self.traps.intersects(flag)
    }

    /// OR `flags` into the live set without consulting traps. Ignored when
    /// flag tracking is off.
    pub fn raise(&mut self, flags: Flags) {
        if self.has_flags {
            self.flags |= flags;
        }
    }

    pub fn clear_flags(&mut self) {
        self.flags = Flags::empty();
    }

    /// Report the conditions an operation raised.
    ///
    /// Untrapped conditions are merged into the live flags. If any raised
    /// condition is trapped, the operation fails with the first trapped
    /// condition in canonical order; the error owns a snapshot of this
    /// context (taken after the merge) and the would-be `result`.
    pub fn signal<T>(&mut self, raised: Flags, result: T) -> Result<T, TrapError<T>> {
        let trapped = raised & self.traps;
        self.raise(raised - trapped);
        match trapped.first() {
            None => Ok(result),
            Some(flag) => {
                debug!(flag = %flag, trapped = %trapped, "rounding condition trapped");
                Err(TrapError {
                    flag,
                    trapped,
                    context: self.clone(),
                    result,
                })
            }
        }
    }
}

impl Default for RoundingContext {
    fn default() -> Self {
        Self::unlimited()
    }
}
