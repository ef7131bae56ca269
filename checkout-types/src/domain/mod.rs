//! Domain models for the checkout orchestrator.

pub mod discount;
pub mod endpoint;
pub mod fraud;
pub mod method;
pub mod refund;
pub mod transaction;

use std::collections::BTreeMap;

pub use discount::{DiscountRule, DiscountTable};
pub use endpoint::Endpoint;
pub use fraud::{FraudOutcome, FraudTier, FraudVerdict};
pub use method::PaymentMethod;
pub use refund::{REFUND_FEE_RATE, Refund};
pub use transaction::{Transaction, TransactionId};

/// Method-specific key/value details supplied with a payment or refund.
pub type Metadata = BTreeMap<String, String>;
