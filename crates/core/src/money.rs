//! Catalog prices.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Largest cent amount that survives an `f64` round trip exactly.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_991.0;

/// Non-negative price in currency units, held as whole cents.
///
/// Integer cents give prices a total order, which the sort step of the facet
/// engine depends on. Serialized as a decimal number (`199.99`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build a price from a decimal amount, rounding to the nearest cent.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        let cents = (amount * 100.0).round();
        if cents > MAX_EXACT_CENTS {
            return Err(DomainError::validation(format!("price {amount} is out of range")));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Price rounded to whole currency units, as shown on the price slider (`$200`).
    pub fn display_whole(&self) -> String {
        format!("${}", (self.0 + 50) / 100)
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}
