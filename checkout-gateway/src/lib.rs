//! # Checkout Gateway Adapters
//!
//! Outbound adapters implementing the orchestrator's ports:
//! - `HttpGateway` - posts records to a payment gateway over HTTP
//! - `TracingGateway` - dry-run gateway that only logs
//! - `LogNotifier` / `LogAnalytics` - sinks that emit structured log events

mod http;
mod sinks;

pub use http::{HttpGateway, TracingGateway};
pub use sinks::{LogAnalytics, LogNotifier};
