//! Transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;
use super::method::PaymentMethod;

/// Unique identifier for a Transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A finalized payment record.
///
/// Transactions are immutable once built - fields are only readable,
/// and the record owns its own copy of the request metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: TransactionId,
    user_id: String,
    /// Amount as requested, before discount and conversion
    original_amount: f64,
    /// Amount after discount, then conversion
    final_amount: f64,
    currency: String,
    payment_method: PaymentMethod,
    metadata: Metadata,
    discount_code: Option<String>,
    /// Fraud level the payment was checked at (0 = skipped)
    fraud_checked: i32,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Assembles a transaction from already-validated parts.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: TransactionId,
        user_id: String,
        original_amount: f64,
        final_amount: f64,
        currency: String,
        payment_method: PaymentMethod,
        metadata: Metadata,
        discount_code: Option<String>,
        fraud_checked: i32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            original_amount,
            final_amount,
            currency,
            payment_method,
            metadata,
            discount_code,
            fraud_checked,
            timestamp,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn original_amount(&self) -> f64 {
        self.original_amount
    }

    pub fn final_amount(&self) -> f64 {
        self.final_amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code.as_deref()
    }

    pub fn fraud_checked(&self) -> i32 {
        self.fraud_checked
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
