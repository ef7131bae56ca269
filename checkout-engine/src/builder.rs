//! Transaction assembly.

use chrono::{DateTime, Utc};

use checkout_types::{Metadata, PaymentMethod, Transaction, TransactionId};

/// Inputs for a transaction, collected once validation and the fraud
/// check have passed.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub user_id: String,
    pub original_amount: f64,
    pub final_amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
    pub metadata: Metadata,
    pub discount_code: Option<String>,
    pub fraud_level: i32,
}

/// Stamps drafts into immutable transactions.
#[derive(Debug, Clone, Copy)]
pub struct TransactionBuilder {
    clock: fn() -> DateTime<Utc>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    /// Uses `clock` instead of the system time for timestamps.
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }

    /// Builds the transaction. No validation happens here.
    pub fn build(&self, draft: TransactionDraft) -> Transaction {
        Transaction::from_parts(
            TransactionId::new(),
            draft.user_id,
            draft.original_amount,
            draft.final_amount,
            draft.currency,
            draft.method,
            draft.metadata,
            draft.discount_code,
            draft.fraud_level,
            (self.clock)(),
        )
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
