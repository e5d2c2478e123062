//! Customer ratings.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Average star rating between 0.0 and 5.0, held in tenths of a star.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: Rating = Rating(50);

    pub fn from_decimal(stars: f64) -> DomainResult<Self> {
        if !stars.is_finite() || !(0.0..=5.0).contains(&stars) {
            return Err(DomainError::validation(format!(
                "rating must be between 0.0 and 5.0 (got {stars})"
            )));
        }
        Ok(Self((stars * 10.0).round() as u8))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl ValueObject for Rating {}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl TryFrom<f64> for Rating {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Rating> for f64 {
    fn from(value: Rating) -> Self {
        value.as_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_full_star_range() {
        assert_eq!(Rating::from_decimal(0.0).unwrap().tenths(), 0);
        assert_eq!(Rating::from_decimal(4.5).unwrap().tenths(), 45);
        assert_eq!(Rating::from_decimal(5.0).unwrap(), Rating::MAX);
        assert_eq!(Rating::from_decimal(4.8).unwrap().to_string(), "4.8");
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        for bad in [-0.1, 5.1, f64::NAN] {
            assert!(matches!(Rating::from_decimal(bad), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn higher_rating_orders_greater() {
        let low = Rating::from_decimal(4.3).unwrap();
        let high = Rating::from_decimal(4.5).unwrap();
        assert!(high > low);
        assert_eq!(serde_json::to_string(&high).unwrap(), "4.5");
    }
}
