//! Fixed-Rate Currency Conversion
//!
//! Converts amounts into the settlement unit using a single rate that is fixed
//! for the lifetime of a converter. The base currency passes through untouched;
//! every other currency is multiplied by the rate.
//!
//! There is no live FX lookup. A converter is built once from configuration
//! and shared read-only.
//!
//! # Example
//! ```
//! use exchange_rates::FixedRateConverter;
//!
//! let converter = FixedRateConverter::new("USD", 1.2).unwrap();
//! assert_eq!(converter.convert(50.0, "USD"), 50.0);
//! assert!((converter.convert(50.0, "EUR") - 60.0).abs() < 1e-9);
//! ```

use serde::Serialize;

/// Rate applied to non-base currencies when none is configured.
pub const DEFAULT_CONVERSION_RATE: f64 = 1.2;

/// Currency for which no conversion factor is applied.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Error type for converter construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Conversion rate must be a positive finite number, got {0}")]
    InvalidRate(f64),

    #[error("Base currency code cannot be empty")]
    EmptyBaseCurrency,
}

// ─────────────────────────────────────────────────────────────────────────────
// Converter
// ─────────────────────────────────────────────────────────────────────────────

/// Converts amounts using a rate fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedRateConverter {
    base_currency: String,
    rate: f64,
}

impl FixedRateConverter {
    /// Creates a converter for the given base currency and rate.
    pub fn new(base_currency: impl Into<String>, rate: f64) -> Result<Self, ExchangeError> {
        let base_currency = base_currency.into();
        if base_currency.trim().is_empty() {
            return Err(ExchangeError::EmptyBaseCurrency);
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ExchangeError::InvalidRate(rate));
        }
        Ok(Self {
            base_currency,
            rate,
        })
    }

    /// Returns the base currency code.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Returns the rate applied to non-base currencies.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns true if `currency` is exactly the base currency code.
    pub fn is_base(&self, currency: &str) -> bool {
        currency == self.base_currency
    }

    /// Converts `amount` denominated in `currency`.
    ///
    /// Identity for the base currency, `amount * rate` otherwise.
    pub fn convert(&self, amount: f64, currency: &str) -> f64 {
        if self.is_base(currency) {
            amount
        } else {
            amount * self.rate
        }
    }
}

impl Default for FixedRateConverter {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            rate: DEFAULT_CONVERSION_RATE,
        }
    }
}
