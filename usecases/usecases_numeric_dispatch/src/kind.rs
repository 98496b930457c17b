//! Numeric Kinds

use std::fmt;

/// Representation tag of a [`NumericValue`](crate::NumericValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integer,
    BigInteger,
    Single,
    Double,
    Fraction,
    Rational,
}

impl NumericKind {
    pub fn name(self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::BigInteger => "big integer",
            NumericKind::Single => "single",
            NumericKind::Double => "double",
            NumericKind::Fraction => "extended fraction",
            NumericKind::Rational => "rational",
        }
    }

    pub fn is_integer_kind(self) -> bool {
        matches!(self, NumericKind::Integer | NumericKind::BigInteger)
    }

    pub fn is_float_kind(self) -> bool {
        matches!(self, NumericKind::Single | NumericKind::Double)
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
