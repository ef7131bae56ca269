//! Fraud tiering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amounts at or above this go through the heavy check.
pub const HEAVY_TIER_THRESHOLD: f64 = 100.0;

/// Which fraud check a payment is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudTier {
    Light,
    Heavy,
}

impl FraudTier {
    /// Picks the tier for an amount.
    pub fn for_amount(amount: f64) -> Self {
        if amount < HEAVY_TIER_THRESHOLD {
            FraudTier::Light
        } else {
            FraudTier::Heavy
        }
    }
}

impl fmt::Display for FraudTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FraudTier::Light => write!(f, "light"),
            FraudTier::Heavy => write!(f, "heavy"),
        }
    }
}

/// What a fraud assessor decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum FraudVerdict {
    Approved,
    Rejected { reason: String },
}

/// Result of the fraud stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudOutcome {
    /// Fraud level was zero or below; nothing ran.
    Skipped,
    /// The assessor for this tier approved the payment.
    Cleared(FraudTier),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundary() {
        assert_eq!(FraudTier::for_amount(0.01), FraudTier::Light);
        assert_eq!(FraudTier::for_amount(99.99), FraudTier::Light);
        assert_eq!(FraudTier::for_amount(100.0), FraudTier::Heavy);
        assert_eq!(FraudTier::for_amount(5000.0), FraudTier::Heavy);
    }
}
