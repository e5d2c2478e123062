//! Facet control configuration.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Price};

pub const PRICE_CEILING_ENV: &str = "STOREFRONT_PRICE_CEILING";
pub const PRICE_STEP_ENV: &str = "STOREFRONT_PRICE_STEP";

/// Bounds of the price slider shared by every category view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetConfig {
    /// Upper end of the price slider; the default price range is `[0, price_ceiling]`.
    pub price_ceiling: Price,
    /// Slider granularity; bounds set through a view snap to multiples of it.
    pub price_step: Price,
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            price_ceiling: Price::from_cents(100_000),
            price_step: Price::from_cents(1_000),
        }
    }
}

impl FacetConfig {
    /// Read overrides from `STOREFRONT_PRICE_CEILING` / `STOREFRONT_PRICE_STEP`.
    ///
    /// Unset variables fall back to defaults; set-but-invalid ones are errors.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FacetConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let defaults = Self::default();
        let price_ceiling = match lookup(PRICE_CEILING_ENV) {
            Some(raw) => parse_positive_price(PRICE_CEILING_ENV, &raw)?,
            None => defaults.price_ceiling,
        };
        let price_step = match lookup(PRICE_STEP_ENV) {
            Some(raw) => parse_positive_price(PRICE_STEP_ENV, &raw)?,
            None => defaults.price_step,
        };

        let config = Self {
            price_ceiling,
            price_step,
        };
        tracing::debug!(
            price_ceiling = %config.price_ceiling,
            price_step = %config.price_step,
            "facet config resolved"
        );
        Ok(config)
    }

    /// Snap a price range onto the slider grid: lower bound down, upper bound
    /// up, never past the ceiling.
    pub fn snap(&self, lower: Price, upper: Price) -> (Price, Price) {
        let step = self.price_step.cents().max(1);
        let ceiling = self.price_ceiling.cents();
        let lower = lower.cents() / step * step;
        let upper = upper.cents().div_ceil(step).saturating_mul(step).min(ceiling);
        (Price::from_cents(lower.min(ceiling)), Price::from_cents(upper))
    }
}

fn parse_positive_price(key: &str, raw: &str) -> DomainResult<Price> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_configuration(format!("{key}: not a number: {raw:?}")))?;
    let price = Price::from_decimal(amount)
        .map_err(|e| DomainError::invalid_configuration(format!("{key}: {e}")))?;
    if price == Price::ZERO {
        return Err(DomainError::invalid_configuration(format!(
            "{key}: must be greater than zero"
        )));
    }
    Ok(price)
}
