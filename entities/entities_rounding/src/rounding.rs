//! Rounding Modes
//!
//! How discarded digits affect the retained result. The context carries the
//! mode; the arithmetic that consumes it lives with the callers.

/// Rounding mode applied when digits are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round to nearest, ties to even.
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfDown,
    /// Away from zero.
    Up,
    /// Toward zero (truncate).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Toward zero, unless the last retained digit would be 0 or 5, in
    /// which case away from zero.
    ZeroFiveUp,
    /// Discarding nonzero digits is an error.
    Unnecessary,
    /// Toward zero, and if anything was discarded, make the last retained
    /// digit odd (or 0/5 in decimal).
    OddOrZeroFiveUp,
}
