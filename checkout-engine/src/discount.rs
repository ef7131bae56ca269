//! Discount application.

use std::sync::Arc;

use checkout_types::OrchestratorConfig;

/// Applies discount codes from the configured table.
///
/// Unknown codes are ignored; the amount passes through unchanged.
#[derive(Debug, Clone)]
pub struct DiscountEngine {
    config: Arc<OrchestratorConfig>,
}

impl DiscountEngine {
    pub fn new(config: Arc<OrchestratorConfig>) -> Self {
        Self { config }
    }

    /// Returns the discounted amount.
    pub fn apply(&self, amount: f64, code: Option<&str>) -> f64 {
        let Some(code) = code else {
            return amount;
        };

        match self.config.discounts().lookup(code) {
            Some(rule) => rule.apply(amount),
            None => {
                tracing::debug!(code, "ignoring unknown discount code");
                amount
            }
        }
    }
}
