//! Refund domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Metadata;

/// Share of a refund kept as a processing fee.
pub const REFUND_FEE_RATE: f64 = 0.05;

/// A refund request as accepted by the orchestrator.
///
/// The referenced transaction is not looked up; the refund is taken as stated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    transaction_id: String,
    user_id: String,
    reason: String,
    amount: f64,
    currency: String,
    metadata: Metadata,
    date: DateTime<Utc>,
    /// `amount` minus the refund fee
    net_amount: f64,
}

impl Refund {
    /// Creates a refund dated now, deducting the fixed fee.
    pub fn new(
        transaction_id: impl Into<String>,
        user_id: impl Into<String>,
        reason: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        metadata: Metadata,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            user_id: user_id.into(),
            reason: reason.into(),
            amount,
            currency: currency.into(),
            metadata,
            date: Utc::now(),
            net_amount: net_of_fee(amount),
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn net_amount(&self) -> f64 {
        self.net_amount
    }
}

fn net_of_fee(amount: f64) -> f64 {
    amount - amount * REFUND_FEE_RATE
}
