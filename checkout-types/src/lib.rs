//! # Checkout Types
//!
//! Domain types, configuration and port traits for the checkout orchestrator.
//! This crate has ZERO IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (PaymentMethod, Transaction, Refund, discounts, fraud tiers)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Request and event shapes crossing the orchestrator boundary
//! - `config/` - Immutable orchestrator configuration
//! - `error/` - The payment error taxonomy

pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use config::OrchestratorConfig;
pub use domain::{
    DiscountRule, DiscountTable, Endpoint, FraudOutcome, FraudTier, FraudVerdict, Metadata,
    PaymentMethod, REFUND_FEE_RATE, Refund, Transaction, TransactionId,
};
pub use dto::*;
pub use error::{ConfigError, GatewayError, PaymentError, SinkError};
pub use ports::{
    AnalyticsSink, FraudAssessor, GatewayAck, GatewayPayload, NotificationSink, PaymentGateway,
    SideEffect, SideEffectFailure,
};
