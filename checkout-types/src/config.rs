//! Orchestrator configuration.
//!
//! Built once, validated, then shared read-only by every pipeline component.

use exchange_rates::{DEFAULT_BASE_CURRENCY, DEFAULT_CONVERSION_RATE, FixedRateConverter};

use crate::domain::{DiscountRule, DiscountTable};
use crate::error::ConfigError;

/// Amounts above this are rejected by the default heavy fraud check.
pub const DEFAULT_HEAVY_REVIEW_CEILING: f64 = 10_000.0;

/// Immutable configuration injected into the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    conversion_rate: f64,
    base_currency: String,
    discounts: DiscountTable,
    heavy_review_ceiling: f64,
}

impl OrchestratorConfig {
    pub fn with_conversion_rate(mut self, rate: f64) -> Self {
        self.conversion_rate = rate;
        self
    }

    pub fn with_base_currency(mut self, currency: impl Into<String>) -> Self {
        self.base_currency = currency.into();
        self
    }

    /// Replaces the whole discount table.
    pub fn with_discounts(mut self, discounts: DiscountTable) -> Self {
        self.discounts = discounts;
        self
    }

    /// Registers one extra discount code.
    pub fn with_discount(mut self, code: impl Into<String>, rule: DiscountRule) -> Self {
        self.discounts.register(code, rule);
        self
    }

    pub fn with_heavy_review_ceiling(mut self, ceiling: f64) -> Self {
        self.heavy_review_ceiling = ceiling;
        self
    }

    pub fn conversion_rate(&self) -> f64 {
        self.conversion_rate
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn discounts(&self) -> &DiscountTable {
        &self.discounts
    }

    pub fn heavy_review_ceiling(&self) -> f64 {
        self.heavy_review_ceiling
    }

    /// Builds the currency converter described by this configuration.
    pub fn converter(&self) -> Result<FixedRateConverter, ConfigError> {
        Ok(FixedRateConverter::new(
            self.base_currency.as_str(),
            self.conversion_rate,
        )?)
    }

    /// Checks every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.converter()?;

        if !self.heavy_review_ceiling.is_finite() || self.heavy_review_ceiling <= 0.0 {
            return Err(ConfigError::InvalidReviewCeiling(self.heavy_review_ceiling));
        }

        for code in self.discounts.codes() {
            if code.trim().is_empty() {
                return Err(ConfigError::InvalidDiscounts(
                    "discount code cannot be empty".into(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            conversion_rate: DEFAULT_CONVERSION_RATE,
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            discounts: DiscountTable::default(),
            heavy_review_ceiling: DEFAULT_HEAVY_REVIEW_CEILING,
        }
    }
}
