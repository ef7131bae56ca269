//! Error types for the checkout orchestrator.

use exchange_rates::ExchangeError;

use crate::domain::{Endpoint, FraudTier};
use crate::ports::GatewayPayload;

/// Failures of `process_payment` / `refund_payment`.
///
/// Everything except `GatewayDispatch` is raised before any record is built
/// or any collaborator is called.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Unsupported payment method: {0}")]
    UnsupportedMethod(String),

    #[error("{0}")]
    InvalidMetadata(String),

    #[error("Amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),

    #[error("Fraud check ({tier}) rejected payment of {amount} for user {user_id}: {reason}")]
    FraudRejected {
        user_id: String,
        amount: f64,
        tier: FraudTier,
        reason: String,
    },

    /// The record was built but the gateway did not confirm it.
    #[error("Gateway dispatch to {endpoint} failed: {source}")]
    GatewayDispatch {
        endpoint: Endpoint,
        record: Box<GatewayPayload>,
        source: GatewayError,
    },
}

impl PaymentError {
    /// True if the call failed before anything was built or sent.
    pub fn never_charged(&self) -> bool {
        !matches!(self, PaymentError::GatewayDispatch { .. })
    }

    /// Returns the record that was built but not confirmed by the gateway.
    pub fn dispatched_record(&self) -> Option<&GatewayPayload> {
        match self {
            PaymentError::GatewayDispatch { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Errors reported by a payment gateway adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway rejected request: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("Gateway unreachable: {0}")]
    Transport(String),
}

/// Error reported by a notification or analytics sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SinkError(pub String);

/// Invalid orchestrator configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("Heavy review ceiling must be a positive finite number, got {0}")]
    InvalidReviewCeiling(f64),

    #[error("Invalid discount table: {0}")]
    InvalidDiscounts(String),
}
