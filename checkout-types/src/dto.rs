//! Data Transfer Objects crossing the orchestrator boundary.

use serde::{Deserialize, Serialize};

use crate::domain::{Metadata, PaymentMethod};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A raw payment request as received from the caller.
///
/// `method` is kept as the caller's string so that unknown methods
/// surface as `UnsupportedMethod` from the validation stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount in the request currency's units
    pub amount: f64,
    /// ISO currency code
    pub currency: String,
    pub user_id: String,
    /// Payment method name, e.g. `credit_card`
    pub method: String,
    /// Method-specific details
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    /// 0 skips the fraud check
    #[serde(default)]
    pub fraud_level: i32,
}

impl PaymentRequest {
    /// Creates a request with no metadata, no discount and fraud checks skipped.
    pub fn new(
        amount: f64,
        currency: impl Into<String>,
        user_id: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            user_id: user_id.into(),
            method: method.into(),
            metadata: Metadata::new(),
            discount_code: None,
            fraud_level: 0,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_discount_code(mut self, code: impl Into<String>) -> Self {
        self.discount_code = Some(code.into());
        self
    }

    pub fn with_fraud_level(mut self, level: i32) -> Self {
        self.fraud_level = level;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Refund DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to refund (part of) an earlier payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    /// Reference to the original transaction; not checked
    pub transaction_id: String,
    pub user_id: String,
    pub reason: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub metadata: Metadata,
}

// ─────────────────────────────────────────────────────────────────────────────
// Side-effect DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Event recorded with the analytics sink after a successful payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub user_id: String,
    /// Final (discounted, converted) amount
    pub amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
}
