//! Fraud assessor port.
//!
//! One assessor serves each fraud tier. Operators can plug in real
//! risk engines by implementing this trait.

use crate::domain::FraudVerdict;

/// Assesses a single payment.
#[async_trait::async_trait]
pub trait FraudAssessor: Send + Sync {
    async fn assess(&self, user_id: &str, amount: f64) -> FraudVerdict;
}
