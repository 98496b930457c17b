//! Condition Flags
//!
//! The eight exceptional conditions an arithmetic operation can signal.
//! Bit positions follow the canonical (alphabetical) order, so iterating a
//! set visits conditions in the order traps are resolved.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u32 {
        /// The exponent was adjusted to fit the allowed range.
        const CLAMPED = 1 << 0;
        const DIVIDE_BY_ZERO = 1 << 1;
        /// Nonzero digits were discarded.
        const INEXACT = 1 << 2;
        const INVALID = 1 << 3;
        const OVERFLOW = 1 << 4;
        /// Digits were discarded, zero or not.
        const ROUNDED = 1 << 5;
        const SUBNORMAL = 1 << 6;
        const UNDERFLOW = 1 << 7;
    }
}

impl Flags {
    /// Every single condition, in canonical order.
    pub const CANONICAL_ORDER: [Flags; 8] = [
        Flags::CLAMPED,
        Flags::DIVIDE_BY_ZERO,
        Flags::INEXACT,
        Flags::INVALID,
        Flags::OVERFLOW,
        Flags::ROUNDED,
        Flags::SUBNORMAL,
        Flags::UNDERFLOW,
    ];

    /// First condition of the set in canonical order.
    pub fn first(self) -> Option<Flags> {
        Self::CANONICAL_ORDER
            .into_iter()
            .find(|flag| self.contains(*flag))
    }

    fn condition_name(self) -> Option<&'static str> {
        const NAMES: [&str; 8] = [
            "Clamped",
            "DivideByZero",
            "Inexact",
            "Invalid",
            "Overflow",
            "Rounded",
            "Subnormal",
            "Underflow",
        ];
        Self::CANONICAL_ORDER
            .iter()
            .position(|flag| *flag == self)
            .map(|index| NAMES[index])
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut separator = "";
        for flag in Self::CANONICAL_ORDER {
            if let Some(name) = flag.condition_name().filter(|_| self.contains(flag)) {
                write!(f, "{separator}{name}")?;
                separator = "|";
            }
        }
        Ok(())
    }
}
