//! Fraud checking.
//!
//! Routes each payment to the light or heavy assessor by amount. What an
//! assessor does internally is policy; the routing rule is fixed:
//! level <= 0 skips, amounts under 100 go light, the rest go heavy.

use std::sync::Arc;

use async_trait::async_trait;
use checkout_types::{
    FraudAssessor, FraudOutcome, FraudTier, FraudVerdict, OrchestratorConfig, PaymentError,
};

/// Tier router over two injected assessors.
#[derive(Clone)]
pub struct FraudChecker {
    light: Arc<dyn FraudAssessor>,
    heavy: Arc<dyn FraudAssessor>,
}

impl FraudChecker {
    /// Creates a checker with custom assessors.
    pub fn new(light: Arc<dyn FraudAssessor>, heavy: Arc<dyn FraudAssessor>) -> Self {
        Self { light, heavy }
    }

    /// Creates a checker with the built-in heuristics.
    pub fn from_config(config: &OrchestratorConfig) -> Self {
        Self::new(
            Arc::new(LightCheck),
            Arc::new(HeavyCheck::new(config.heavy_review_ceiling())),
        )
    }

    /// Runs the check for `level`, failing with `FraudRejected` on rejection.
    pub async fn check(
        &self,
        level: i32,
        user_id: &str,
        amount: f64,
    ) -> Result<FraudOutcome, PaymentError> {
        if level <= 0 {
            tracing::debug!(user_id, "fraud check skipped");
            return Ok(FraudOutcome::Skipped);
        }

        let tier = FraudTier::for_amount(amount);
        let assessor = match tier {
            FraudTier::Light => &self.light,
            FraudTier::Heavy => &self.heavy,
        };

        match assessor.assess(user_id, amount).await {
            FraudVerdict::Approved => {
                tracing::debug!(user_id, amount, %tier, "fraud check passed");
                Ok(FraudOutcome::Cleared(tier))
            }
            FraudVerdict::Rejected { reason } => {
                tracing::warn!(user_id, amount, %tier, %reason, "fraud check rejected payment");
                Err(PaymentError::FraudRejected {
                    user_id: user_id.to_string(),
                    amount,
                    tier,
                    reason,
                })
            }
        }
    }
}

impl std::fmt::Debug for FraudChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FraudChecker").finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in assessors
// ─────────────────────────────────────────────────────────────────────────────

/// Cheap check for small payments: only requires an identifiable user.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightCheck;

#[async_trait]
impl FraudAssessor for LightCheck {
    async fn assess(&self, user_id: &str, _amount: f64) -> FraudVerdict {
        if user_id.trim().is_empty() {
            return FraudVerdict::Rejected {
                reason: "anonymous user".into(),
            };
        }
        FraudVerdict::Approved
    }
}

/// Check for large payments: also holds back anything over the review ceiling.
#[derive(Debug, Clone, Copy)]
pub struct HeavyCheck {
    review_ceiling: f64,
}

impl HeavyCheck {
    pub fn new(review_ceiling: f64) -> Self {
        Self { review_ceiling }
    }
}

#[async_trait]
impl FraudAssessor for HeavyCheck {
    async fn assess(&self, user_id: &str, amount: f64) -> FraudVerdict {
        if let FraudVerdict::Rejected { reason } = LightCheck.assess(user_id, amount).await {
            return FraudVerdict::Rejected { reason };
        }
        if amount > self.review_ceiling {
            return FraudVerdict::Rejected {
                reason: format!("amount exceeds review ceiling of {}", self.review_ceiling),
            };
        }
        FraudVerdict::Approved
    }
}
