//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The orchestrator depends on these traits, not concrete implementations.

mod fraud;
mod gateway;
mod sinks;

pub use fraud::FraudAssessor;
pub use gateway::{GatewayAck, GatewayPayload, PaymentGateway};
pub use sinks::{AnalyticsSink, NotificationSink, SideEffect, SideEffectFailure};
