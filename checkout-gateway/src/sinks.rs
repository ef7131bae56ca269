//! Log-backed notification and analytics sinks.

use async_trait::async_trait;

use checkout_types::{AnalyticsEvent, AnalyticsSink, NotificationSink, SinkError};

/// Emits the payment confirmation as a log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn send_confirmation(
        &self,
        user_id: &str,
        amount: f64,
        currency: &str,
    ) -> Result<(), SinkError> {
        tracing::info!(
            target: "checkout::notifications",
            user_id,
            amount,
            currency,
            "payment confirmation"
        );
        Ok(())
    }
}

/// Emits analytics events as structured log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalytics;

#[async_trait]
impl AnalyticsSink for LogAnalytics {
    async fn record(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        let json = serde_json::to_string(event).map_err(|e| SinkError(e.to_string()))?;
        tracing::info!(target: "checkout::analytics", event = %json, "payment recorded");
        Ok(())
    }
}
