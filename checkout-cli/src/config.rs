//! Configuration loading from environment.

use std::env;

use checkout_types::{DiscountTable, OrchestratorConfig};

/// Loads the orchestrator configuration from environment variables.
pub fn from_env() -> anyhow::Result<OrchestratorConfig> {
    from_lookup(|key| env::var(key).ok())
}

/// Builds the configuration from any key lookup.
///
/// Unset keys keep their defaults. Extra discount codes are merged over
/// the built-in table.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<OrchestratorConfig> {
    let mut config = OrchestratorConfig::default();

    if let Some(rate) = lookup("CHECKOUT_CONVERSION_RATE") {
        let rate: f64 = rate
            .parse()
            .map_err(|_| anyhow::anyhow!("CHECKOUT_CONVERSION_RATE is not a number: {}", rate))?;
        config = config.with_conversion_rate(rate);
    }

    if let Some(currency) = lookup("CHECKOUT_BASE_CURRENCY") {
        config = config.with_base_currency(currency);
    }

    if let Some(ceiling) = lookup("CHECKOUT_HEAVY_REVIEW_CEILING") {
        let ceiling: f64 = ceiling.parse().map_err(|_| {
            anyhow::anyhow!("CHECKOUT_HEAVY_REVIEW_CEILING is not a number: {}", ceiling)
        })?;
        config = config.with_heavy_review_ceiling(ceiling);
    }

    if let Some(raw) = lookup("CHECKOUT_DISCOUNTS") {
        let extra: DiscountTable = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("CHECKOUT_DISCOUNTS is not a valid table: {}", e))?;
        let mut discounts = config.discounts().clone();
        discounts.merge(extra);
        config = config.with_discounts(discounts);
    }

    config.validate()?;
    Ok(config)
}
