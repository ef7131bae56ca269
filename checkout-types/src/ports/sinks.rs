//! Notification and analytics ports.
//!
//! Both are best-effort: their failures are reported, never propagated.

use std::fmt;

use crate::dto::AnalyticsEvent;
use crate::error::SinkError;

/// Sends the payment confirmation to the user.
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send_confirmation(
        &self,
        user_id: &str,
        amount: f64,
        currency: &str,
    ) -> Result<(), SinkError>;
}

/// Records a completed payment for analytics.
#[async_trait::async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn record(&self, event: &AnalyticsEvent) -> Result<(), SinkError>;
}

/// Which best-effort side effect failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    Notification,
    Analytics,
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideEffect::Notification => write!(f, "notification"),
            SideEffect::Analytics => write!(f, "analytics"),
        }
    }
}

/// A non-fatal side-effect failure, reported for operational visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct SideEffectFailure {
    pub effect: SideEffect,
    pub user_id: String,
    pub error: SinkError,
}
