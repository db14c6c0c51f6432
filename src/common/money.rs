use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::common::error::MoneyParseError;

// 10^18 is the largest power of ten an i64 holds.
const MAX_EXPONENT: i64 = 18;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An immutable, signed, integral monetary amount.
///
/// Every operation returns a new value; nothing mutates an existing `Money`.
///
/// Overflow of the underlying `i64` is a programming defect. Plain arithmetic
/// panics on it in debug builds; use [`Money::checked_plus`] and
/// [`Money::checked_minus`] to detect it instead.
///
/// # Examples
/// ```
/// use transaction_ledger::common::money::Money;
///
/// let balance = Money::of(10).minus(Money::of(25));
/// assert_eq!(balance, Money::of(-15));
/// assert_eq!(balance.negate(), Money::of(15));
/// assert_eq!(Money::of(7).minus(Money::of(7)), Money::ZERO);
/// ```
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn of(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn amount(&self) -> i64 {
        self.0
    }

    pub fn plus(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    pub fn minus(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }

    pub fn negate(self) -> Money {
        Money(-self.0)
    }

    pub fn checked_plus(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_minus(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money::of(amount)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    /// Parses an integral amount. `"10"` and `"10.00"` are both ten; `"10.5"`
    /// is rejected since `Money` carries no fractional units.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let bd: BigDecimal = t
            .parse()
            .map_err(|e: bigdecimal::ParseBigDecimalError| MoneyParseError::Invalid(e.to_string()))?;

        if bd.is_zero() {
            return Ok(Money::ZERO);
        }

        // value = digits * 10^-scale, with no trailing zeros left in digits.
        // Rescaling is avoided: an exponent like `1e1000000000` would expand
        // to a billion digits.
        let (digits, scale) = bd.normalized().into_bigint_and_exponent();
        if scale > 0 {
            return Err(MoneyParseError::Fractional(t.to_string()));
        }
        let out_of_range = || MoneyParseError::OutOfRange(t.to_string());
        if scale < -MAX_EXPONENT {
            return Err(out_of_range());
        }

        let value = digits
            .to_i64()
            .and_then(|d| d.checked_mul(10i64.pow((-scale) as u32)))
            .ok_or_else(out_of_range)?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        self.plus(rhs)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        self.minus(rhs)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        self.negate()
    }
}
