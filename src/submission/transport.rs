//! HTTP transport for the prediction service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::TransportError;
use crate::form::FormState;

const PREDICT_PATH: &str = "/api/predict";
const HEALTH_PATH: &str = "/api/health";
const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(3);

/// Body returned by the predict endpoint, including error bodies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    #[serde(default)]
    pub success: bool,
    pub predicted_salary: Option<f64>,
    pub currency: Option<String>,
    pub period: Option<String>,
    pub error: Option<String>,
    /// Framework-level error detail, either a string or a structured list.
    pub detail: Option<serde_json::Value>,
}

impl PredictResponse {
    /// Reason given by the service for rejecting a request, if any.
    pub fn rejection_reason(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().filter(|e| !e.trim().is_empty()) {
            return Some(error.to_string());
        }
        match &self.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => {
                Some(detail.clone())
            }
            _ => None,
        }
    }
}

/// Body returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub preprocessor: String,
}

impl HealthStatus {
    pub fn model_loaded(&self) -> bool {
        self.model == "loaded" && self.preprocessor == "loaded"
    }
}

/// Network seam used by the submission coordinator.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one prediction request. Any failure to obtain a parsable body is
    /// a [`TransportError`].
    async fn predict(&self, form: &FormState) -> Result<PredictResponse, TransportError>;

    async fn health(&self) -> Result<HealthStatus, TransportError>;
}

/// `reqwest`-backed transport.
///
/// Prediction requests have no timeout: a submission waits until the server
/// answers or the connection fails. Health checks are bounded by
/// `health_timeout` and a timeout counts as unreachable.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    health_timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        })
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn predict(&self, form: &FormState) -> Result<PredictResponse, TransportError> {
        let url = self.url(PREDICT_PATH);
        tracing::debug!(%url, "sending prediction request");
        let response = self.client.post(&url).json(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        match serde_json::from_slice::<PredictResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(TransportError::Status(status.as_u16())),
            Err(err) => Err(TransportError::Decode(err)),
        }
    }

    async fn health(&self) -> Result<HealthStatus, TransportError> {
        let response = self
            .client
            .get(self.url(HEALTH_PATH))
            .timeout(self.health_timeout)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
