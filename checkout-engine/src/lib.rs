//! # Checkout Engine
//!
//! The payment pipeline and the orchestrator that drives it.
//!
//! ## Architecture
//!
//! - `validator` - Method-specific metadata checks
//! - `fraud` - Amount-tiered routing to pluggable fraud assessors
//! - `discount` - Discount code lookup
//! - `builder` - Immutable transaction assembly
//! - `orchestrator` - `process_payment` / `refund_payment`
//!
//! The orchestrator is generic over the gateway and sink ports, allowing
//! different adapters to be injected.

pub mod builder;
pub mod discount;
pub mod fraud;
pub mod orchestrator;
pub mod validator;

#[cfg(test)]
mod orchestrator_tests;

pub use builder::{TransactionBuilder, TransactionDraft};
pub use discount::DiscountEngine;
pub use fraud::{FraudChecker, HeavyCheck, LightCheck};
pub use orchestrator::PaymentOrchestrator;
