//! Prediction service client
//!
//! POSTs feature vectors to `/predict` and simulation requests to
//! `/simulate`. Requests are JSON with no authentication; there is no
//! retry or de-duplication. Errors are normalized: the server's `detail`
//! field when it can be parsed, a status line otherwise, or the transport
//! error text.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error, instrument};

use application::{ApplicationError, PredictionPort};
use domain::{PredictionOutcome, SimulationBatch, SimulationRequest, WeatherFeatures};

/// Prediction client errors
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Transport-level failure before any HTTP status was received
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Non-2xx response; the message is the server's `detail` field when
    /// available, otherwise a generic status line
    #[error("{0}")]
    RequestFailed(String),

    /// Success-path body did not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Prediction service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Service base URL (default: <http://localhost:8000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Error body shape used by the service for non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the prediction service
#[derive(Debug)]
pub struct PredictorClient {
    client: Client,
    config: PredictorConfig,
}

impl PredictorClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PredictorConfig) -> Result<Self, PredictorError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PredictorError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, PredictorError> {
        Self::new(PredictorConfig::default())
    }

    /// Classify a single feature vector
    ///
    /// The caller validates ranges before invocation; this method sends
    /// the vector as-is.
    #[instrument(skip(self, features))]
    pub async fn predict(
        &self,
        features: &WeatherFeatures,
    ) -> Result<PredictionOutcome, PredictorError> {
        self.post_json("/predict", features)
            .await
            .inspect_err(|e| error!(error = %e, "Prediction request failed"))
    }

    /// Generate and classify a batch of simulated scenarios
    ///
    /// The caller range-validates `samples` (1-50) before invocation; the
    /// gateway does not re-validate.
    #[instrument(skip(self), fields(samples = request.samples, season = %request.season))]
    pub async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationBatch, PredictorError> {
        self.post_json("/simulate", request)
            .await
            .inspect_err(|e| error!(error = %e, "Simulation request failed"))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, PredictorError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.config.base_url);
        debug!(url = %url, "Sending prediction service request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| PredictorError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictorError::RequestFailed(Self::error_message(
                status, &body,
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| PredictorError::ConnectionFailed(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| PredictorError::MalformedResponse(e.to_string()))
    }

    /// Best-effort human-readable message for a non-2xx response
    fn error_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body).map_or_else(|_| format!("HTTP {status}"), |e| e.detail)
    }
}

#[async_trait]
impl PredictionPort for PredictorClient {
    async fn predict(
        &self,
        features: &WeatherFeatures,
    ) -> Result<PredictionOutcome, ApplicationError> {
        Self::predict(self, features).await.map_err(Into::into)
    }

    async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationBatch, ApplicationError> {
        Self::simulate(self, request).await.map_err(Into::into)
    }
}

impl From<PredictorError> for ApplicationError {
    fn from(e: PredictorError) -> Self {
        Self::Gateway(e.to_string())
    }
}
