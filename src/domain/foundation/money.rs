//! Money value object.
//!
//! Amounts are held as integer cents so revenue splits add up exactly.
//! On the wire the platform API uses plain JSON numbers in currency units
//! (`4.99`), which are rounded to the nearest cent when read. Amounts above
//! [`Money::MAX_UNITS`] are rejected; arithmetic saturates instead of wrapping.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use super::ValidationError;

/// A non-negative amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest accepted wire value in currency units. Its cent value stays
    /// well inside the range `f64` represents exactly.
    pub const MAX_UNITS: f64 = 10_000_000_000_000.0;

    /// Creates an amount from cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates an amount from a decimal currency value, rounding to the nearest cent.
    pub fn from_units(units: f64) -> Result<Self, ValidationError> {
        if !units.is_finite() || units < 0.0 {
            return Err(ValidationError::invalid_format(
                "price",
                format!("must be a non-negative finite number, got {}", units),
            ));
        }
        if units > Self::MAX_UNITS {
            return Err(ValidationError::invalid_format(
                "price",
                format!("must not exceed {}, got {}", Self::MAX_UNITS, units),
            ));
        }
        Ok(Self((units * 100.0).round() as u64))
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in currency units.
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `percent`% of this amount, rounded down to the cent.
    pub fn percent(&self, percent: u64) -> Self {
        let share = u128::from(self.0) * u128::from(percent) / 100;
        Self(u64::try_from(share).unwrap_or(u64::MAX))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Money::from_units(units).map_err(serde::de::Error::custom)
    }
}
