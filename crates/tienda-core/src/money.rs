//! # Money
//!
//! Prices and totals as a whole number of cents.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  f64 prices:   0.1 + 0.2 = 0.30000000000000004                          │
//! │                a cart total summed in another order can differ          │
//! │                                                                         │
//! │  Money(i64):   10 + 20 = 30 cents, in any order                         │
//! │                so `total == Σ price × quantity` holds exactly           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The browser frontend sends and expects plain decimal numbers (`10.5`).
//! `Money` serializes to that shape and rounds incoming values to the
//! nearest cent, so the integer representation never leaks onto the wire.
//!
//! ```rust
//! use tienda_core::money::Money;
//!
//! let tea = Money::from_cents(1099);
//! assert_eq!(tea.checked_mul_quantity(3).map(|m| m.cents()), Some(3297));
//! assert_eq!(Money::from_decimal(10.99), Some(tea));
//! assert_eq!(tea.to_string(), "$10.99");
//! ```

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// An amount in cents. Negative values exist only so validation can reject
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a currency-unit amount, rounding to the nearest cent.
    ///
    /// `None` for NaN, infinities and amounts outside the `i64` cent range.
    ///
    /// ```rust
    /// use tienda_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(10.0).unwrap().cents(), 1000);
    /// assert_eq!(Money::from_decimal(0.125).unwrap().cents(), 13);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        // i64::MAX is not exactly representable; stay strictly inside the range
        if cents >= i64::MAX as f64 || cents <= i64::MIN as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Currency units, as sent on the wire.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum of two amounts, or `None` if it leaves the `i64` range.
    #[inline]
    pub const fn checked_add(self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Line total for `qty` units at this price, or `None` on overflow.
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds up `amounts`, stopping at the first overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }
}

/// `$12.34`, used in log fields.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount)
            .ok_or_else(|| de::Error::custom(format!("invalid monetary amount: {amount}")))
    }
}
