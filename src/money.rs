//! Prices in integer minor units.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CENTS_PER_UNIT, CURRENCY_SYMBOL, prelude::*};

/// An amount of money held as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Money::from_units(45)` is €45
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(CENTS_PER_UNIT))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Price of `count` units at this rate
    pub const fn times(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Applies a percentage and rounds half-up to whole currency units.
    ///
    /// Used for the suggested weekly and monthly prices, which are quoted
    /// without cents.
    pub const fn percent_rounded_to_units(self, percent: u64) -> Self {
        let scaled = self.0.saturating_mul(percent);
        let divisor = CENTS_PER_UNIT * 100;
        Self::from_units(scaled.saturating_add(divisor / 2) / divisor)
    }

    /// Parses a user-entered amount such as `45`, `45.5` or ` 12.99 `.
    ///
    /// Returns `None` for empty, non-numeric, negative or non-finite input.
    /// Fractions beyond cents are rounded.
    pub fn parse_amount(raw: &str) -> Option<Self> {
        parse_value(raw).and_then(Self::from_value)
    }

    /// Parses like [`parse_amount`](Self::parse_amount), accepting only
    /// amounts no lower than `minimum`.
    ///
    /// The comparison uses the value as typed, before rounding to cents, so
    /// `0.999` is below a minimum of €1.
    pub fn parse_amount_at_least(raw: &str, minimum: Self) -> Option<Self> {
        let value = parse_value(raw)?;
        if value < minimum.as_units() {
            return None;
        }
        Self::from_value(value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_units(self) -> f64 {
        self.0 as f64 / 100.0
    }

    fn from_value(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if cents > 9_007_199_254_740_992.0 {
            return None;
        }
        // Non-negative and bounded by 2^53 above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = cents as u64;
        Some(Self(cents))
    }
}

/// A finite, non-negative number in currency units
fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / CENTS_PER_UNIT;
        let cents = self.0 % CENTS_PER_UNIT;
        if cents == 0 {
            write!(f, "{CURRENCY_SYMBOL}{units}")
        } else {
            write!(f, "{CURRENCY_SYMBOL}{units}.{cents:02}")
        }
    }
}
