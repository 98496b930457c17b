//! Extended Fractions
//!
//! Arbitrary-precision `mantissa × radix^exponent` values in radix 2 or 10,
//! with a separate sign flag (so negative zero is representable) and the
//! special values infinity and NaN.

use std::fmt;

use malachite::base::num::arithmetic::traits::{
    DivisibleBy, DivisibleByPowerOf2, Pow, UnsignedAbs,
};
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::base::rounding_modes::RoundingMode;
use malachite::{Integer, Natural, Rational};

use crate::big::BigNumber;
use crate::error::NumericError;
use crate::rational::BigRational;

/// Largest exponent magnitude that conversions will materialize as an exact
/// integer or rational.
pub const MAX_MATERIALIZED_EXPONENT: u64 = 100_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Decimal,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
        }
    }

    fn log2(self) -> f64 {
        match self {
            Radix::Binary => 1.0,
            Radix::Decimal => std::f64::consts::LOG2_10,
        }
    }

    fn power(self, exponent: u64) -> Natural {
        Natural::from(self.value()).pow(exponent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FractionKind {
    Finite,
    Infinity,
    NaN,
}

/// Sign-magnitude arbitrary-precision fraction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedFraction {
    radix: Radix,
    kind: FractionKind,
    negative: bool,
    mantissa: Natural,
    exponent: Integer,
}

impl ExtendedFraction {
    /// `mantissa × radix^exponent`; the sign is taken from the mantissa.
    pub fn new(radix: Radix, mantissa: &BigNumber, exponent: &BigNumber) -> Self {
        Self {
            radix,
            kind: FractionKind::Finite,
            negative: mantissa.is_negative(),
            mantissa: Natural::try_from(mantissa.abs().as_integer()).unwrap_or(Natural::ZERO),
            exponent: exponent.as_integer().clone(),
        }
    }

    pub fn decimal(mantissa: i64, exponent: i64) -> Self {
        Self::new(
            Radix::Decimal,
            &BigNumber::from_i64(mantissa),
            &BigNumber::from_i64(exponent),
        )
    }

    pub fn binary(mantissa: i64, exponent: i64) -> Self {
        Self::new(
            Radix::Binary,
            &BigNumber::from_i64(mantissa),
            &BigNumber::from_i64(exponent),
        )
    }

    pub fn infinity(radix: Radix, negative: bool) -> Self {
        Self {
            radix,
            kind: FractionKind::Infinity,
            negative,
            mantissa: Natural::ZERO,
            exponent: Integer::ZERO,
        }
    }

    pub fn nan(radix: Radix) -> Self {
        Self {
            radix,
            kind: FractionKind::NaN,
            negative: false,
            mantissa: Natural::ZERO,
            exponent: Integer::ZERO,
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn kind(&self) -> FractionKind {
        self.kind
    }

    pub fn is_finite(&self) -> bool {
        self.kind == FractionKind::Finite
    }

    pub fn is_infinity(&self) -> bool {
        self.kind == FractionKind::Infinity
    }

    pub fn is_nan(&self) -> bool {
        self.kind == FractionKind::NaN
    }

    /// State of the sign flag, including for zero and the special values.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.is_finite() && self.mantissa == 0u32
    }

    /// -1, 0 or 1; `None` for NaN.
    pub fn sign(&self) -> Option<i32> {
        match self.kind {
            FractionKind::NaN => None,
            FractionKind::Finite if self.mantissa == 0u32 => Some(0),
            _ if self.negative => Some(-1),
            _ => Some(1),
        }
    }

    /// Unsigned mantissa.
    pub fn mantissa(&self) -> BigNumber {
        BigNumber::from(self.mantissa.clone())
    }

    pub fn signed_mantissa(&self) -> BigNumber {
        let magnitude = self.mantissa();
        if self.negative {
            magnitude.neg()
        } else {
            magnitude
        }
    }

    pub fn exponent(&self) -> BigNumber {
        BigNumber::from_integer(self.exponent.clone())
    }

    /// Finite with no fractional part.
    pub fn is_integral(&self) -> bool {
        if !self.is_finite() {
            return false;
        }
        if self.mantissa == 0u32 || self.exponent >= 0 {
            return true;
        }
        let Ok(places) = u64::try_from(&-&self.exponent) else {
            return false;
        };
        // radix^places exceeds the mantissa, so it cannot divide it.
        if places > self.mantissa.significant_bits() {
            return false;
        }
        match self.radix {
            Radix::Binary => (&self.mantissa).divisible_by_power_of_2(places),
            Radix::Decimal => (&self.mantissa).divisible_by(&self.radix.power(places)),
        }
    }

    /// Integer part, truncated toward zero.
    pub fn truncate(&self) -> Result<BigNumber, NumericError> {
        self.check_finite("truncate")?;
        if self.mantissa == 0u32 {
            return Ok(BigNumber::ZERO);
        }
        let magnitude = if self.exponent >= 0 {
            let places = self.materializable_exponent("truncate")?;
            &self.mantissa * self.radix.power(places)
        } else {
            let places = match u64::try_from(&-&self.exponent) {
                Ok(places) if places <= self.mantissa.significant_bits() => places,
                _ => return Ok(BigNumber::ZERO),
            };
            match self.radix {
                Radix::Binary => &self.mantissa >> places,
                Radix::Decimal => &self.mantissa / self.radix.power(places),
            }
        };
        let integer = Integer::from(magnitude);
        Ok(BigNumber::from_integer(if self.negative {
            -integer
        } else {
            integer
        }))
    }

    /// Exact rational value of a finite fraction.
    pub fn to_rational(&self) -> Result<BigRational, NumericError> {
        self.check_finite("to_rational")?;
        let places = self.materializable_exponent("to_rational")?;
        let scale = Rational::from(self.radix.power(places));
        let mantissa = Rational::from(Integer::from(self.mantissa.clone()));
        let magnitude = if self.exponent >= 0 {
            mantissa * scale
        } else {
            mantissa / scale
        };
        Ok(BigRational::from_rational(if self.negative {
            -magnitude
        } else {
            magnitude
        }))
    }

    /// Nearest double, ties to even. Infinity and NaN map to their IEEE
    /// counterparts.
    pub fn to_f64(&self) -> f64 {
        match self.float_shortcut() {
            Some(shortcut) => shortcut,
            None => self
                .to_rational()
                .map(|rational| rational.to_f64())
                .unwrap_or(f64::NAN),
        }
    }

    /// Nearest single, ties to even.
    pub fn to_f32(&self) -> f32 {
        match self.float_shortcut() {
            Some(shortcut) => shortcut as f32,
            None => self
                .to_rational()
                .map(|rational| rational.to_f32())
                .unwrap_or(f32::NAN),
        }
    }

    pub fn negate(&self) -> Self {
        let mut negated = self.clone();
        negated.negative = !self.negative;
        negated
    }

    pub fn abs(&self) -> Self {
        let mut absolute = self.clone();
        absolute.negative = false;
        absolute
    }

    fn check_finite(&self, operation: &'static str) -> Result<(), NumericError> {
        match self.kind {
            FractionKind::Finite => Ok(()),
            FractionKind::Infinity => Err(NumericError::unrepresentable(operation, "infinity")),
            FractionKind::NaN => Err(NumericError::unrepresentable(operation, "NaN")),
        }
    }

    fn materializable_exponent(&self, operation: &'static str) -> Result<u64, NumericError> {
        let magnitude = (&self.exponent).unsigned_abs();
        match u64::try_from(&magnitude) {
            Ok(places) if places <= MAX_MATERIALIZED_EXPONENT => Ok(places),
            _ => Err(NumericError::unrepresentable(
                operation,
                format!("exponent {} is too large to materialize", self.exponent),
            )),
        }
    }

    /// Float results that need no exact arithmetic, such as the special
    /// values or magnitudes far outside the binary64 range.
    fn float_shortcut(&self) -> Option<f64> {
        let signed = |magnitude: f64| if self.negative { -magnitude } else { magnitude };
        match self.kind {
            FractionKind::NaN => return Some(f64::NAN),
            FractionKind::Infinity => return Some(signed(f64::INFINITY)),
            FractionKind::Finite => {}
        }
        if self.mantissa == 0u32 {
            return Some(signed(0.0));
        }
        let (exponent, _) = f64::rounding_from(&self.exponent, RoundingMode::Nearest);
        let approximate_log2 = self.mantissa.significant_bits() as f64 + exponent * self.radix.log2();
        if approximate_log2 > 1100.0 {
            Some(signed(f64::INFINITY))
        } else if approximate_log2 < -1200.0 {
            Some(signed(0.0))
        } else {
            None
        }
    }
}

impl fmt::Display for ExtendedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match self.kind {
            FractionKind::NaN => write!(f, "NaN"),
            FractionKind::Infinity => write!(f, "{sign}Infinity"),
            FractionKind::Finite => {
                let marker = match self.radix {
                    Radix::Binary => 'P',
                    Radix::Decimal => 'E',
                };
                write!(f, "{sign}{}{marker}{}", self.mantissa, self.exponent)
            }
        }
    }
}
