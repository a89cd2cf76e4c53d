//! Monetary amounts.

use rust_decimal::Decimal;
use serde::Serialize;

/// Exact decimal money amount.
///
/// Arithmetic is checked: operations that would leave the range of
/// [`Decimal`] return `None` instead of wrapping or panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Wraps an exact decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Converts a price such as `29.90` into money.
    ///
    /// Uses the shortest decimal text that reads back as the same `f64`, so
    /// `29.9` becomes exactly 29.9 rather than its binary approximation.
    /// Returns `None` for non-finite values and values beyond the range of
    /// [`Decimal`].
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Self::zero());
        }

        value.to_string().parse::<Decimal>().ok().map(Self)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the exact amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the nearest `f64` to this amount.
    pub fn to_f64(&self) -> f64 {
        // Decimal's text form is exact, and parsing it rounds correctly.
        self.0.to_string().parse().unwrap_or(f64::NAN)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds another amount, or `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Multiplies by a quantity, or `None` on overflow.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self.0.round_dp(2);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-${:.2}", rounded.abs())
        } else {
            write!(f, "${:.2}", rounded.abs())
        }
    }
}
