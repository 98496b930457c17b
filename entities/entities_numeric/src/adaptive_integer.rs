//! Adaptive Integer
//!
//! A signed counter that lives in a machine word until an operation would
//! overflow it, then switches to a [`BigNumber`] for the rest of its life.
//! Bit counts, digit counts and shift amounts use it so that the common case
//! never allocates while pathological exponents still compute exactly.
//!
//! Promotion is one-way: once an instance holds a big value it keeps doing
//! arithmetic in arbitrary precision even if the value shrinks back into
//! range.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::big::BigNumber;
use crate::error::NumericError;

/// Largest magnitude that can be multiplied by ten without leaving the i64
/// range. Anything beyond it is promoted before multiplying.
const MULTIPLY_BY_TEN_LIMIT: i64 = i64::MAX / 10;

#[derive(Clone, Debug)]
enum Repr {
    Small(i64),
    Big(BigNumber),
}

/// Integer that is machine-width until it overflows.
///
/// Mutators take `&mut self` and return `&mut Self` so that a caller can chain
/// them:
///
/// ```rust
/// use entities_numeric::AdaptiveInteger;
///
/// let mut digits = AdaptiveInteger::from_i64(7);
/// digits.multiply_by_ten().add(3);
/// assert_eq!(digits.as_i64().unwrap(), 73);
/// ```
#[derive(Clone, Debug)]
pub struct AdaptiveInteger {
    repr: Repr,
}

impl AdaptiveInteger {
    /// Zero, held in a machine word.
    pub const fn new() -> Self {
        Self {
            repr: Repr::Small(0),
        }
    }

    /// Create from a machine integer.
    pub const fn from_i64(value: i64) -> Self {
        Self {
            repr: Repr::Small(value),
        }
    }

    /// Wrap an arbitrary-precision value. Values that fit in an i64 start out
    /// machine-width.
    pub fn from_big(value: BigNumber) -> Self {
        match value.to_i64() {
            Some(small) => Self::from_i64(small),
            None => Self {
                repr: Repr::Big(value),
            },
        }
    }

    /// True once the value has been promoted to arbitrary precision.
    pub fn is_big(&self) -> bool {
        matches!(self.repr, Repr::Big(_))
    }

    fn promote_with(&mut self, value: BigNumber) {
        if let Repr::Small(previous) = self.repr {
            trace!(previous, "adaptive integer promoted to arbitrary precision");
        }
        self.repr = Repr::Big(value);
    }

    /// Add a machine integer. Adding zero does nothing.
    pub fn add(&mut self, delta: i64) -> &mut Self {
        if delta == 0 {
            return self;
        }
        match self.repr {
            Repr::Small(value) => match value.checked_add(delta) {
                Some(sum) => self.repr = Repr::Small(sum),
                None => self.promote_with(BigNumber::from_i64(value).plus_i64(delta)),
            },
            Repr::Big(ref mut big) => *big = big.plus_i64(delta),
        }
        self
    }

    /// Add an arbitrary-precision value.
    pub fn add_big(&mut self, delta: &BigNumber) -> &mut Self {
        if let Some(small) = delta.to_i64() {
            return self.add(small);
        }
        let sum = self.as_big_integer().plus(delta);
        self.promote_with(sum);
        self
    }

    /// Subtract a machine integer: x - delta
    pub fn subtract(&mut self, delta: i64) -> &mut Self {
        match delta.checked_neg() {
            Some(negated) => self.add(negated),
            None => self.subtract_big(&BigNumber::from_i64(delta)),
        }
    }

    /// Subtract an arbitrary-precision value.
    pub fn subtract_big(&mut self, delta: &BigNumber) -> &mut Self {
        self.add_big(&delta.neg())
    }

    /// Add one.
    pub fn increment(&mut self) -> &mut Self {
        self.add(1)
    }

    /// Subtract one.
    pub fn decrement(&mut self) -> &mut Self {
        self.add(-1)
    }

    /// Multiply by ten in place, promoting first when the product could leave
    /// the i64 range.
    pub fn multiply_by_ten(&mut self) -> &mut Self {
        match self.repr {
            Repr::Small(value) if (-MULTIPLY_BY_TEN_LIMIT..=MULTIPLY_BY_TEN_LIMIT).contains(&value) => {
                self.repr = Repr::Small(value * 10);
            }
            Repr::Small(value) => self.promote_with(BigNumber::from_i64(value).times_small(10)),
            Repr::Big(ref mut big) => *big = big.times_small(10),
        }
        self
    }

    /// Arithmetic negation in place. `i64::MIN` is promoted.
    pub fn negate(&mut self) -> &mut Self {
        match self.repr {
            Repr::Small(value) => match value.checked_neg() {
                Some(negated) => self.repr = Repr::Small(negated),
                None => self.promote_with(BigNumber::from_i64(value).neg()),
            },
            Repr::Big(ref mut big) => *big = big.neg(),
        }
        self
    }

    /// Add this value onto `other` without exposing which representation
    /// either side uses.
    pub fn add_this_to<'a>(&self, other: &'a mut AdaptiveInteger) -> &'a mut AdaptiveInteger {
        match &self.repr {
            Repr::Small(value) => other.add(*value),
            Repr::Big(big) => other.add_big(big),
        }
    }

    /// Subtract this value from `other`.
    pub fn subtract_this_from<'a>(
        &self,
        other: &'a mut AdaptiveInteger,
    ) -> &'a mut AdaptiveInteger {
        match &self.repr {
            Repr::Small(value) => other.subtract(*value),
            Repr::Big(big) => other.subtract_big(big),
        }
    }

    /// The value as a big number. Does not change the stored representation.
    pub fn as_big_integer(&self) -> BigNumber {
        match &self.repr {
            Repr::Small(value) => BigNumber::from_i64(*value),
            Repr::Big(big) => big.clone(),
        }
    }

    /// The negated value as a big number.
    pub fn as_negated_big_integer(&self) -> BigNumber {
        match &self.repr {
            Repr::Small(value) => BigNumber::from_i64(*value).neg(),
            Repr::Big(big) => big.neg(),
        }
    }

    /// Sign of the value: -1, 0 or 1.
    pub fn sign(&self) -> i32 {
        match &self.repr {
            Repr::Small(value) => value.signum() as i32,
            Repr::Big(big) => big.sign(),
        }
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.sign() == 0
    }

    /// Whether [`as_i64`](Self::as_i64) would succeed.
    pub fn can_fit_in_i64(&self) -> bool {
        match &self.repr {
            Repr::Small(_) => true,
            Repr::Big(big) => big.to_i64().is_some(),
        }
    }

    /// Whether [`as_i32`](Self::as_i32) would succeed.
    pub fn can_fit_in_i32(&self) -> bool {
        self.as_i64()
            .map(|value| i32::try_from(value).is_ok())
            .unwrap_or(false)
    }

    /// Convert to i64
    ///
    /// Fails with `Unrepresentable` if the value is out of range
    pub fn as_i64(&self) -> Result<i64, NumericError> {
        match &self.repr {
            Repr::Small(value) => Ok(*value),
            Repr::Big(big) => big
                .to_i64()
                .ok_or_else(|| NumericError::unrepresentable("as_i64", format!("{big} exceeds i64"))),
        }
    }

    /// Convert to i32
    ///
    /// Fails with `Unrepresentable` if the value is out of range
    pub fn as_i32(&self) -> Result<i32, NumericError> {
        let wide = self.as_i64()?;
        i32::try_from(wide)
            .map_err(|_| NumericError::unrepresentable("as_i32", format!("{wide} exceeds i32")))
    }

    /// Compare with a machine integer without allocating on the small path.
    pub fn compare_to_i64(&self, other: i64) -> Ordering {
        match &self.repr {
            Repr::Small(value) => value.cmp(&other),
            Repr::Big(big) => big.comp(&BigNumber::from_i64(other)),
        }
    }
}

impl Default for AdaptiveInteger {
    fn default() -> Self {
        Self::new()
    }
}

impl From<i64> for AdaptiveInteger {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<BigNumber> for AdaptiveInteger {
    fn from(value: BigNumber) -> Self {
        Self::from_big(value)
    }
}

impl PartialEq for AdaptiveInteger {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AdaptiveInteger {}

impl PartialOrd for AdaptiveInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AdaptiveInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.repr, &other.repr) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            (_, Repr::Small(b)) => self.compare_to_i64(*b),
            (Repr::Small(a), _) => other.compare_to_i64(*a).reverse(),
            (Repr::Big(a), Repr::Big(b)) => a.comp(b),
        }
    }
}

impl fmt::Display for AdaptiveInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Small(value) => write!(f, "{value}"),
            Repr::Big(big) => write!(f, "{big}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_stays_small_in_range() {
        let mut value = AdaptiveInteger::new();
        value.add(5).add(-7).add(100);
        assert_eq!(value.as_i64().unwrap(), 98);
        assert!(!value.is_big());
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut value = AdaptiveInteger::from_i64(i64::MAX);
        value.add(0);
        assert!(!value.is_big());
        assert_eq!(value.as_i64().unwrap(), i64::MAX);
    }

    #[test]
    fn test_add_promotes_on_positive_overflow() {
        let mut value = AdaptiveInteger::from_i64(i64::MAX);
        value.add(1);
        assert!(value.is_big());
        assert_eq!(value.as_big_integer(), BigNumber::from_i64(i64::MAX).plus_i64(1));
        assert!(value.as_i64().is_err());
    }

    #[test]
    fn test_add_promotes_on_negative_overflow() {
        let mut value = AdaptiveInteger::from_i64(i64::MIN);
        value.add(-1);
        assert!(value.is_big());
        assert_eq!(value.to_string(), "-9223372036854775809");
    }

    #[test]
    fn test_promotion_is_irreversible() {
        let mut value = AdaptiveInteger::from_i64(i64::MAX);
        value.add(10).add(-20);
        assert!(value.is_big());
        assert_eq!(value.as_i64().unwrap(), i64::MAX - 10);
    }

    #[test]
    fn test_multiply_by_ten() {
        let mut value = AdaptiveInteger::from_i64(-12);
        value.multiply_by_ten().multiply_by_ten();
        assert_eq!(value.as_i64().unwrap(), -1200);
        assert!(!value.is_big());

        let mut at_limit = AdaptiveInteger::from_i64(MULTIPLY_BY_TEN_LIMIT);
        at_limit.multiply_by_ten();
        assert!(!at_limit.is_big());
        assert_eq!(at_limit.as_i64().unwrap(), MULTIPLY_BY_TEN_LIMIT * 10);

        let mut beyond = AdaptiveInteger::from_i64(MULTIPLY_BY_TEN_LIMIT + 1);
        beyond.multiply_by_ten();
        assert!(beyond.is_big());
        assert_eq!(
            beyond.as_big_integer(),
            BigNumber::from_i64(MULTIPLY_BY_TEN_LIMIT + 1).times_small(10)
        );
    }

    #[test]
    fn test_negate_min_promotes() {
        let mut value = AdaptiveInteger::from_i64(i64::MIN);
        value.negate();
        assert!(value.is_big());
        assert_eq!(value.as_big_integer(), BigNumber::from_i64(i64::MIN).neg());
    }

    #[test]
    fn test_subtract_min() {
        let mut value = AdaptiveInteger::new();
        value.subtract(i64::MIN);
        assert_eq!(value.as_big_integer(), BigNumber::from_i64(i64::MIN).neg());
    }

    #[test]
    fn test_negated_big_integer() {
        let value = AdaptiveInteger::from_i64(42);
        assert_eq!(value.as_negated_big_integer().to_i64(), Some(-42));
        assert!(!value.is_big());
    }

    #[test]
    fn test_add_this_to_and_subtract_this_from() {
        let small = AdaptiveInteger::from_i64(5);
        let mut big = AdaptiveInteger::from_i64(i64::MAX);
        big.add(1);

        let mut target = AdaptiveInteger::from_i64(10);
        small.add_this_to(&mut target);
        assert_eq!(target.as_i64().unwrap(), 15);

        big.add_this_to(&mut target);
        assert_eq!(target.as_big_integer(), BigNumber::from_i64(i64::MAX).plus_i64(16));

        big.subtract_this_from(&mut target);
        small.subtract_this_from(&mut target);
        assert_eq!(target.as_i64().unwrap(), 10);
    }

    #[test]
    fn test_fit_checks() {
        assert!(AdaptiveInteger::from_i64(i32::MAX as i64).can_fit_in_i32());
        assert!(!AdaptiveInteger::from_i64(i32::MAX as i64 + 1).can_fit_in_i32());
        assert!(AdaptiveInteger::from_i64(i64::MIN).can_fit_in_i64());
        assert_eq!(AdaptiveInteger::from_i64(-3).as_i32().unwrap(), -3);
        assert!(matches!(
            AdaptiveInteger::from_i64(i64::MAX).as_i32(),
            Err(NumericError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn test_value_equality_ignores_representation() {
        let mut promoted = AdaptiveInteger::from_i64(i64::MAX);
        promoted.add(1).add(-1);
        assert!(promoted.is_big());
        assert_eq!(promoted, AdaptiveInteger::from_i64(i64::MAX));
        assert!(AdaptiveInteger::from_i64(1) < promoted);
        assert_eq!(promoted.compare_to_i64(0), Ordering::Greater);
    }

    #[test]
    fn test_from_big_starts_small_when_possible() {
        assert!(!AdaptiveInteger::from_big(BigNumber::from_i64(7)).is_big());
        assert!(AdaptiveInteger::from_big(BigNumber::from_u64(u64::MAX)).is_big());
    }

    proptest! {
        #[test]
        fn add_sequence_matches_direct_big_sum(deltas in prop::collection::vec(any::<i64>(), 0..64)) {
            let mut adaptive = AdaptiveInteger::new();
            let mut expected = BigNumber::ZERO;
            for delta in &deltas {
                adaptive.add(*delta);
                expected = expected.plus_i64(*delta);
            }
            prop_assert_eq!(adaptive.as_big_integer(), expected);
        }

        #[test]
        fn multiply_by_ten_matches_big_product(start in any::<i64>(), rounds in 0usize..24) {
            let mut adaptive = AdaptiveInteger::from_i64(start);
            let mut expected = BigNumber::from_i64(start);
            for _ in 0..rounds {
                adaptive.multiply_by_ten();
                expected = expected.times_small(10);
            }
            prop_assert_eq!(adaptive.as_big_integer(), expected);
        }
    }
}
