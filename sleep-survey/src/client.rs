//! Prediction service client.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ClientConfig, ClientError, PredictionPayload};

/// Successful answer of the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
}

/// Sends survey payloads to a prediction service.
///
/// The controller only talks to the service through this trait, so it can be
/// driven by `MockPredictionClient` in tests.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Pre-flight reachability probe. Succeeds by default.
    async fn check_health(&self) -> Result<(), ClientError> {
        Ok(())
    }

    /// Submit a payload and return the predicted label.
    async fn predict(&self, payload: &PredictionPayload) -> Result<PredictionResponse, ClientError>;
}

/// `PredictionClient` backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    http: Client,
    config: ClientConfig,
}

impl HttpPredictionClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("sleep-survey/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn check_health(&self) -> Result<(), ClientError> {
        let Some(url) = &self.config.health_endpoint else {
            return Ok(());
        };

        debug!(%url, "probing prediction server");
        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(%url, error = %err, "health probe failed");
            ClientError::Connectivity(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "health probe returned error status");
            return Err(ClientError::Connectivity(format!(
                "health check returned HTTP {status}"
            )));
        }

        Ok(())
    }

    async fn predict(&self, payload: &PredictionPayload) -> Result<PredictionResponse, ClientError> {
        let url = &self.config.endpoint;
        debug!(%url, "sending prediction request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|err| ClientError::Connectivity(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ClientError::Connectivity(err.to_string()))?;

        parse_prediction(&body)
    }
}

/// Parse a 2xx response body. A missing or empty `prediction` is malformed.
pub fn parse_prediction(body: &[u8]) -> Result<PredictionResponse, ClientError> {
    let response: PredictionResponse = serde_json::from_slice(body)
        .map_err(|err| ClientError::MalformedResponse(err.to_string()))?;

    if response.prediction.is_empty() {
        return Err(ClientError::MalformedResponse(
            "empty prediction".to_string(),
        ));
    }

    Ok(response)
}
