//! Payment Orchestrator
//!
//! Drives a payment through the fixed pipeline:
//! validate → fraud-check → discount → convert → build → dispatch → notify → analytics.
//! Contains NO infrastructure logic - adapters are injected through the ports.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use checkout_types::{
    AnalyticsEvent, AnalyticsSink, ConfigError, Endpoint, GatewayAck, GatewayPayload,
    NotificationSink, OrchestratorConfig, PaymentError, PaymentGateway, PaymentRequest, Refund,
    RefundRequest, SideEffect, SideEffectFailure, SinkError, Transaction,
};
use exchange_rates::FixedRateConverter;

use crate::builder::{TransactionBuilder, TransactionDraft};
use crate::discount::DiscountEngine;
use crate::fraud::FraudChecker;
use crate::validator;

/// Composes the pipeline stages and the external collaborators.
///
/// Generic over the gateway and sink ports - adapters are injected at compile time.
/// Fraud assessors are dynamic so operators can swap risk engines at wiring time.
pub struct PaymentOrchestrator<G, N, A>
where
    G: PaymentGateway,
    N: NotificationSink,
    A: AnalyticsSink,
{
    config: Arc<OrchestratorConfig>,
    fraud: FraudChecker,
    discounts: DiscountEngine,
    converter: FixedRateConverter,
    builder: TransactionBuilder,
    gateway: G,
    notifier: N,
    analytics: A,
    failure_reports: Option<UnboundedSender<SideEffectFailure>>,
}

impl<G, N, A> PaymentOrchestrator<G, N, A>
where
    G: PaymentGateway,
    N: NotificationSink,
    A: AnalyticsSink,
{
    /// Creates an orchestrator with the built-in fraud assessors.
    pub fn new(
        config: OrchestratorConfig,
        gateway: G,
        notifier: N,
        analytics: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let converter = config.converter()?;
        let fraud = FraudChecker::from_config(&config);
        let config = Arc::new(config);

        Ok(Self {
            discounts: DiscountEngine::new(config.clone()),
            config,
            fraud,
            converter,
            builder: TransactionBuilder::new(),
            gateway,
            notifier,
            analytics,
            failure_reports: None,
        })
    }

    /// Replaces the fraud checker (e.g. with real risk engines).
    pub fn with_fraud_checker(mut self, fraud: FraudChecker) -> Self {
        self.fraud = fraud;
        self
    }

    /// Replaces the transaction builder.
    pub fn with_transaction_builder(mut self, builder: TransactionBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Sends notification/analytics failures to `sender` in addition to logging them.
    pub fn with_failure_reports(mut self, sender: UnboundedSender<SideEffectFailure>) -> Self {
        self.failure_reports = Some(sender);
        self
    }

    /// Returns the configuration the orchestrator was built with.
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────────

    /// Processes a payment and returns the dispatched transaction.
    ///
    /// Validation and fraud failures return before anything is built or sent.
    /// A gateway failure returns `GatewayDispatch` carrying the built record.
    #[tracing::instrument(
        skip(self, req),
        fields(user_id = %req.user_id, amount = req.amount, currency = %req.currency, method = %req.method)
    )]
    pub async fn process_payment(&self, req: PaymentRequest) -> Result<Transaction, PaymentError> {
        validator::validate_amount(req.amount)?;
        let method = validator::validate(&req.method, &req.metadata)?;
        let outcome = self
            .fraud
            .check(req.fraud_level, &req.user_id, req.amount)
            .await?;

        let discounted = self
            .discounts
            .apply(req.amount, req.discount_code.as_deref());
        let final_amount = self.converter.convert(discounted, &req.currency);

        let transaction = self.builder.build(TransactionDraft {
            user_id: req.user_id,
            original_amount: req.amount,
            final_amount,
            currency: req.currency,
            method,
            metadata: req.metadata,
            discount_code: req.discount_code,
            fraud_level: req.fraud_level,
        });
        tracing::info!(
            transaction_id = %transaction.id(),
            final_amount,
            fraud = ?outcome,
            "transaction built"
        );

        self.dispatch(
            method.endpoint(),
            GatewayPayload::Transaction(transaction.clone()),
        )
        .await?;

        let notified = self
            .notifier
            .send_confirmation(transaction.user_id(), final_amount, transaction.currency())
            .await;
        self.report_failure(SideEffect::Notification, transaction.user_id(), notified);

        let event = AnalyticsEvent {
            user_id: transaction.user_id().to_string(),
            amount: final_amount,
            currency: transaction.currency().to_string(),
            method,
        };
        let recorded = self.analytics.record(&event).await;
        self.report_failure(SideEffect::Analytics, transaction.user_id(), recorded);

        Ok(transaction)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Refunds
    // ─────────────────────────────────────────────────────────────────────────────

    /// Issues a refund net of the fixed fee.
    ///
    /// The referenced transaction is not looked up or checked against the
    /// refund's amount or currency.
    #[tracing::instrument(
        skip(self, req),
        fields(transaction_id = %req.transaction_id, user_id = %req.user_id, amount = req.amount)
    )]
    pub async fn refund_payment(&self, req: RefundRequest) -> Result<Refund, PaymentError> {
        let refund = Refund::new(
            req.transaction_id,
            req.user_id,
            req.reason,
            req.amount,
            req.currency,
            req.metadata,
        );
        tracing::info!(net_amount = refund.net_amount(), "refund built");

        self.dispatch(Endpoint::Refund, GatewayPayload::Refund(refund.clone()))
            .await?;

        Ok(refund)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────────

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        payload: GatewayPayload,
    ) -> Result<GatewayAck, PaymentError> {
        match self.gateway.post(endpoint, &payload).await {
            Ok(ack) => {
                tracing::debug!(%endpoint, status = ack.status, "gateway accepted record");
                Ok(ack)
            }
            Err(source) => {
                tracing::error!(%endpoint, error = %source, "gateway dispatch failed");
                Err(PaymentError::GatewayDispatch {
                    endpoint,
                    record: Box::new(payload),
                    source,
                })
            }
        }
    }

    fn report_failure(&self, effect: SideEffect, user_id: &str, result: Result<(), SinkError>) {
        let Err(error) = result else {
            return;
        };

        tracing::warn!(%effect, user_id, %error, "side effect failed");

        if let Some(sender) = &self.failure_reports {
            let failure = SideEffectFailure {
                effect,
                user_id: user_id.to_string(),
                error,
            };
            if sender.send(failure).is_err() {
                tracing::debug!(%effect, "failure report receiver dropped");
            }
        }
    }
}
