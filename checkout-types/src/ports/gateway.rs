//! Payment gateway port.
//!
//! The gateway executes charges and refunds. It owns its own retry,
//! timeout and concurrency behaviour.

use serde::{Deserialize, Serialize};

use crate::domain::{Endpoint, Refund, Transaction};
use crate::error::GatewayError;

/// A record sent to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GatewayPayload {
    Transaction(Transaction),
    Refund(Refund),
}

/// Acknowledgement returned by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayAck {
    /// Status code reported by the gateway
    pub status: u16,
    /// Response body, `Null` if the gateway sent none
    #[serde(default)]
    pub body: serde_json::Value,
}

/// Port trait for payment gateways.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Posts a record to the given endpoint.
    async fn post(
        &self,
        endpoint: Endpoint,
        payload: &GatewayPayload,
    ) -> Result<GatewayAck, GatewayError>;
}
