//! HTTP payment gateway adapter.

use async_trait::async_trait;
use reqwest::Client;

use checkout_types::{Endpoint, GatewayAck, GatewayError, GatewayPayload, PaymentGateway};

/// Gateway client posting JSON records to `<base_url><endpoint path>`.
pub struct HttpGateway {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl HttpGateway {
    /// Creates a new gateway client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            http: Client::new(),
        }
    }

    /// Sets the API key sent with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Returns the full URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<GatewayAck, GatewayError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if status.is_success() {
            let body = if body.trim().is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
            };
            Ok(GatewayAck {
                status: status.as_u16(),
                body,
            })
        } else {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    #[tracing::instrument(skip(self, payload), fields(url = %self.url(endpoint)))]
    async fn post(
        &self,
        endpoint: Endpoint,
        payload: &GatewayPayload,
    ) -> Result<GatewayAck, GatewayError> {
        let mut req = self.http.post(self.url(endpoint)).json(payload);
        if let Some(key) = &self.api_key {
            req = req.header("X-API-Key", key);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        self.handle_response(resp).await
    }
}

/// Gateway that logs each record instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingGateway;

#[async_trait]
impl PaymentGateway for TracingGateway {
    async fn post(
        &self,
        endpoint: Endpoint,
        payload: &GatewayPayload,
    ) -> Result<GatewayAck, GatewayError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| GatewayError::Transport(format!("cannot encode payload: {}", e)))?;
        tracing::info!(%endpoint, payload = %body, "dry run: record not sent");
        Ok(GatewayAck { status: 202, body })
    }
}
