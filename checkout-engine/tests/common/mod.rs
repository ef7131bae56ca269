//! Shared test doubles for the orchestrator integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use checkout_engine::{FraudChecker, PaymentOrchestrator};
use checkout_types::{
    AnalyticsEvent, AnalyticsSink, Endpoint, FraudAssessor, FraudTier, FraudVerdict, GatewayAck,
    GatewayError, GatewayPayload, NotificationSink, OrchestratorConfig, PaymentGateway, SinkError,
};

/// Gateway that keeps every posted record.
#[derive(Clone, Default)]
pub struct SpyGateway {
    posted: Arc<Mutex<Vec<(Endpoint, GatewayPayload)>>>,
}

impl SpyGateway {
    pub fn posted(&self) -> Vec<(Endpoint, GatewayPayload)> {
        self.posted.lock().unwrap().clone()
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.posted().into_iter().map(|(e, _)| e).collect()
    }
}

#[async_trait]
impl PaymentGateway for SpyGateway {
    async fn post(
        &self,
        endpoint: Endpoint,
        payload: &GatewayPayload,
    ) -> Result<GatewayAck, GatewayError> {
        self.posted
            .lock()
            .unwrap()
            .push((endpoint, payload.clone()));
        Ok(GatewayAck {
            status: 201,
            body: serde_json::json!({ "accepted": true }),
        })
    }
}

/// Notification and analytics sink that keeps what it received.
#[derive(Clone, Default)]
pub struct SpySinks {
    confirmations: Arc<Mutex<Vec<(String, f64, String)>>>,
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl SpySinks {
    pub fn confirmations(&self) -> Vec<(String, f64, String)> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for SpySinks {
    async fn send_confirmation(
        &self,
        user_id: &str,
        amount: f64,
        currency: &str,
    ) -> Result<(), SinkError> {
        self.confirmations.lock().unwrap().push((
            user_id.to_string(),
            amount,
            currency.to_string(),
        ));
        Ok(())
    }
}

#[async_trait]
impl AnalyticsSink for SpySinks {
    async fn record(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Fraud assessor that approves and remembers which tier it serves.
pub struct TierProbe {
    tier: FraudTier,
    hits: Arc<Mutex<Vec<FraudTier>>>,
}

#[async_trait]
impl FraudAssessor for TierProbe {
    async fn assess(&self, _user_id: &str, _amount: f64) -> FraudVerdict {
        self.hits.lock().unwrap().push(self.tier);
        FraudVerdict::Approved
    }
}

/// Everything a test needs to inspect after driving the orchestrator.
pub struct Harness {
    pub orchestrator: PaymentOrchestrator<SpyGateway, SpySinks, SpySinks>,
    pub gateway: SpyGateway,
    pub sinks: SpySinks,
    pub fraud_hits: Arc<Mutex<Vec<FraudTier>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(OrchestratorConfig::default())
    }

    pub fn with_config(config: OrchestratorConfig) -> Self {
        let gateway = SpyGateway::default();
        let sinks = SpySinks::default();
        let fraud_hits = Arc::new(Mutex::new(Vec::new()));
        let checker = FraudChecker::new(
            Arc::new(TierProbe {
                tier: FraudTier::Light,
                hits: fraud_hits.clone(),
            }),
            Arc::new(TierProbe {
                tier: FraudTier::Heavy,
                hits: fraud_hits.clone(),
            }),
        );
        let orchestrator =
            PaymentOrchestrator::new(config, gateway.clone(), sinks.clone(), sinks.clone())
                .expect("valid config")
                .with_fraud_checker(checker);

        Self {
            orchestrator,
            gateway,
            sinks,
            fraud_hits,
        }
    }

    pub fn fraud_hits(&self) -> Vec<FraudTier> {
        self.fraud_hits.lock().unwrap().clone()
    }
}
