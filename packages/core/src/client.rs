use enviroscreen_types::{InputRecord, Prediction, json};
use thiserror::Error;

/// Predict endpoint of the locally running backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

/// Notice shown to the user when a submission fails, whatever the cause.
pub const BACKEND_ERROR_NOTICE: &str = "Error making prediction. Is the backend running?";

/// Errors raised by [`PredictionClient::predict`].
///
/// All variants surface to the user identically as [`BACKEND_ERROR_NOTICE`];
/// the distinction only exists for the log line.
#[derive(Error, Debug)]
pub enum PredictionError {
    /// The request never completed (connection refused, reset, ...).
    #[error("request to prediction backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("prediction backend returned {status}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The 2xx response body did not decode into a [`Prediction`].
    #[error("failed to decode prediction response: {0}")]
    Decode(#[from] json::Error),
}

/// Thin client for the predict endpoint.
///
/// One POST of the full [`InputRecord`] per call; no retries, no timeout
/// beyond the transport default.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Point the client at a different predict endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the record and decode the backend's classification.
    pub async fn predict(&self, record: &InputRecord) -> Result<Prediction, PredictionError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting prediction request");
        let response = self.http.post(&self.endpoint).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::Status { status, body });
        }

        let body = response.text().await?;
        let prediction = json::from_str(&body)?;
        Ok(prediction)
    }
}
