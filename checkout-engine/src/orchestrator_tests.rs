//! PaymentOrchestrator unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use tokio::sync::mpsc;

    use checkout_types::{
        AnalyticsEvent, AnalyticsSink, Endpoint, FraudAssessor, FraudVerdict, GatewayAck,
        GatewayError, GatewayPayload, NotificationSink, OrchestratorConfig, PaymentError,
        PaymentGateway, PaymentRequest, RefundRequest, SideEffect, SinkError,
    };

    use crate::{FraudChecker, PaymentOrchestrator, TransactionBuilder};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Fraud,
        Gateway(Endpoint),
        Notify { user_id: String, amount: f64 },
        Analytics(AnalyticsEvent),
    }

    /// Records every collaborator call in order. Each port can be told to fail.
    #[derive(Clone, Default)]
    pub struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
        fail_gateway: bool,
        fail_notify: bool,
        fail_analytics: bool,
    }

    impl Recorder {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentGateway for Recorder {
        async fn post(
            &self,
            endpoint: Endpoint,
            _payload: &GatewayPayload,
        ) -> Result<GatewayAck, GatewayError> {
            self.calls.lock().unwrap().push(Call::Gateway(endpoint));
            if self.fail_gateway {
                return Err(GatewayError::Rejected {
                    status: 502,
                    message: "upstream down".into(),
                });
            }
            Ok(GatewayAck {
                status: 200,
                body: serde_json::Value::Null,
            })
        }
    }

    #[async_trait]
    impl NotificationSink for Recorder {
        async fn send_confirmation(
            &self,
            user_id: &str,
            amount: f64,
            _currency: &str,
        ) -> Result<(), SinkError> {
            self.calls.lock().unwrap().push(Call::Notify {
                user_id: user_id.to_string(),
                amount,
            });
            if self.fail_notify {
                return Err(SinkError("smtp timeout".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AnalyticsSink for Recorder {
        async fn record(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Analytics(event.clone()));
            if self.fail_analytics {
                return Err(SinkError("collector offline".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl FraudAssessor for Recorder {
        async fn assess(&self, _user_id: &str, _amount: f64) -> FraudVerdict {
            self.calls.lock().unwrap().push(Call::Fraud);
            FraudVerdict::Rejected {
                reason: "blocked".into(),
            }
        }
    }

    fn orchestrator(recorder: &Recorder) -> PaymentOrchestrator<Recorder, Recorder, Recorder> {
        PaymentOrchestrator::new(
            OrchestratorConfig::default(),
            recorder.clone(),
            recorder.clone(),
            recorder.clone(),
        )
        .unwrap()
    }

    fn card_payment(amount: f64) -> PaymentRequest {
        PaymentRequest::new(amount, "USD", "u1", "credit_card")
            .with_metadata("cardNumber", "4242")
            .with_metadata("expiry", "12/30")
    }

    #[tokio::test]
    async fn test_side_effects_run_in_order() {
        let recorder = Recorder::default();
        let orchestrator = orchestrator(&recorder);

        let tx = orchestrator
            .process_payment(card_payment(100.0).with_discount_code("WELCOME10"))
            .await
            .unwrap();

        assert_eq!(tx.final_amount(), 90.0);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Gateway(Endpoint::Credit),
                Call::Notify {
                    user_id: "u1".into(),
                    amount: 90.0
                },
                Call::Analytics(AnalyticsEvent {
                    user_id: "u1".into(),
                    amount: 90.0,
                    currency: "USD".into(),
                    method: checkout_types::PaymentMethod::CreditCard,
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_metadata_touches_nothing() {
        let recorder = Recorder::default();
        let orchestrator = orchestrator(&recorder);

        let result = orchestrator
            .process_payment(PaymentRequest::new(10.0, "USD", "u1", "paypal"))
            .await;

        assert!(matches!(result, Err(PaymentError::InvalidMetadata(_))));
        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_amount_touches_nothing() {
        let recorder = Recorder::default();
        let orchestrator = orchestrator(&recorder);

        let result = orchestrator.process_payment(card_payment(-1.0)).await;

        assert!(matches!(result, Err(PaymentError::InvalidAmount(_))));
        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fraud_rejection_stops_before_dispatch() {
        let recorder = Recorder::default();
        let checker = FraudChecker::new(Arc::new(recorder.clone()), Arc::new(recorder.clone()));
        let orchestrator = orchestrator(&recorder).with_fraud_checker(checker);

        let err = orchestrator
            .process_payment(card_payment(20.0).with_fraud_level(1))
            .await
            .unwrap_err();

        assert!(err.never_charged());
        assert!(matches!(err, PaymentError::FraudRejected { ref user_id, amount, .. } if user_id == "u1" && amount == 20.0));
        assert_eq!(recorder.calls(), vec![Call::Fraud]);
    }

    #[tokio::test]
    async fn test_gateway_failure_returns_built_record() {
        let recorder = Recorder {
            fail_gateway: true,
            ..Recorder::default()
        };
        let orchestrator = orchestrator(&recorder);

        let err = orchestrator
            .process_payment(card_payment(100.0))
            .await
            .unwrap_err();

        assert!(!err.never_charged());
        match err.dispatched_record() {
            Some(GatewayPayload::Transaction(tx)) => {
                assert_eq!(tx.user_id(), "u1");
                assert_eq!(tx.final_amount(), 100.0);
            }
            other => panic!("unexpected record: {other:?}"),
        }
        // No notification or analytics for an unconfirmed charge
        assert_eq!(recorder.calls(), vec![Call::Gateway(Endpoint::Credit)]);
    }

    #[tokio::test]
    async fn test_refund_gateway_failure_is_propagated() {
        let recorder = Recorder {
            fail_gateway: true,
            ..Recorder::default()
        };
        let orchestrator = orchestrator(&recorder);

        let err = orchestrator
            .refund_payment(RefundRequest {
                transaction_id: "t1".into(),
                user_id: "u1".into(),
                reason: "duplicate charge".into(),
                amount: 40.0,
                currency: "USD".into(),
                metadata: Default::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PaymentError::GatewayDispatch {
                endpoint: Endpoint::Refund,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_sink_failures_are_reported_not_fatal() {
        let recorder = Recorder {
            fail_notify: true,
            fail_analytics: true,
            ..Recorder::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        let orchestrator = orchestrator(&recorder).with_failure_reports(tx);

        let transaction = orchestrator.process_payment(card_payment(30.0)).await;

        assert!(transaction.is_ok());
        assert_eq!(recorder.calls().len(), 3);

        let first = rx.recv().await.unwrap();
        assert_eq!(first.effect, SideEffect::Notification);
        assert_eq!(first.user_id, "u1");
        assert_eq!(first.error, SinkError("smtp timeout".into()));

        let second = rx.recv().await.unwrap();
        assert_eq!(second.effect, SideEffect::Analytics);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_sink_failures_without_reporter_still_succeed() {
        let recorder = Recorder {
            fail_notify: true,
            ..Recorder::default()
        };
        let orchestrator = orchestrator(&recorder);

        assert!(orchestrator.process_payment(card_payment(30.0)).await.is_ok());
    }

    #[tokio::test]
    async fn test_transaction_builder_is_injectable() {
        fn clock() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap()
        }
        let recorder = Recorder::default();
        let orchestrator = orchestrator(&recorder)
            .with_transaction_builder(TransactionBuilder::with_clock(clock));

        let tx = orchestrator
            .process_payment(card_payment(10.0))
            .await
            .unwrap();

        assert_eq!(tx.timestamp(), clock());
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let recorder = Recorder::default();
        let result = PaymentOrchestrator::new(
            OrchestratorConfig::default().with_conversion_rate(f64::NAN),
            recorder.clone(),
            recorder.clone(),
            recorder,
        );
        assert!(result.is_err());
    }
}
