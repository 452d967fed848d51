//! Submission lifecycle for one data-entry screen instance.

pub mod transport;

use std::cell::RefCell;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::SubmissionError;
use crate::form::{validate, FormState, ValidationResult};
use crate::storage::{SessionStore, PREDICTION_KEY};

pub use transport::{HealthStatus, HttpTransport, PredictResponse, Transport};

/// Status reason recorded when no usable response was received.
pub const CONNECTION_ERROR: &str = "connection error";
/// Used when the service rejects a request without giving a reason.
pub const GENERIC_FAILURE: &str = "Prediction failed. Please try again.";
const STORAGE_FAILURE: &str = "Unable to save the prediction. Please try again.";

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_PERIOD: &str = "year";

/// Prediction handed from the data-entry screen to the result screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub predicted_salary: f64,
    pub currency: String,
    pub period: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    /// Accepts a response as a prediction, or returns the rejection reason.
    pub fn from_response(response: PredictResponse) -> Result<Self, String> {
        let salary = match (response.success, response.predicted_salary) {
            (true, Some(salary)) if salary.is_finite() => salary,
            _ => {
                return Err(response
                    .rejection_reason()
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()))
            }
        };
        Ok(Self {
            predicted_salary: salary,
            currency: response
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            period: response.period.unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
            success: true,
            error: response.error,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Failed(String),
    Succeeded,
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(PredictionResult),
    Error(String),
}

/// Orchestrates the prediction request and the hand-off to session storage.
///
/// Status lives in a `RefCell`: the coordinator runs on a single-threaded
/// executor and overlapping calls on the same task are rejected, not queued.
pub struct SubmissionCoordinator {
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
    status: RefCell<SubmissionStatus>,
}

impl SubmissionCoordinator {
    pub fn new(transport: Arc<dyn Transport>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            transport,
            store,
            status: RefCell::new(SubmissionStatus::Idle),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(*self.status.borrow(), SubmissionStatus::InFlight)
    }

    /// Submits a complete form.
    ///
    /// On success the prediction is stored under [`PREDICTION_KEY`] before
    /// this returns, so callers may navigate to the result screen right away.
    pub async fn submit(&self, form: &FormState) -> Result<Outcome, SubmissionError> {
        if let ValidationResult::Missing(missing) = validate(form) {
            tracing::debug!(?missing, "refusing to submit incomplete form");
            return Err(SubmissionError::Incomplete);
        }

        {
            let mut status = self.status.borrow_mut();
            match *status {
                SubmissionStatus::InFlight => return Err(SubmissionError::InFlight),
                SubmissionStatus::Succeeded => return Err(SubmissionError::Completed),
                SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
            }
            *status = SubmissionStatus::InFlight;
        }
        tracing::info!("submitting prediction request");

        let response = self.transport.predict(form).await;

        let outcome = match response {
            Err(err) => {
                tracing::warn!(error = %err, "prediction request failed");
                Outcome::Error(CONNECTION_ERROR.to_string())
            }
            Ok(response) => match PredictionResult::from_response(response) {
                Ok(prediction) => self.persist(prediction),
                Err(reason) => {
                    tracing::warn!(%reason, "prediction rejected");
                    Outcome::Error(reason)
                }
            },
        };

        *self.status.borrow_mut() = match &outcome {
            Outcome::Success(_) => SubmissionStatus::Succeeded,
            Outcome::Error(reason) => SubmissionStatus::Failed(reason.clone()),
        };
        Ok(outcome)
    }

    fn persist(&self, prediction: PredictionResult) -> Outcome {
        let written = serde_json::to_string(&prediction)
            .map_err(crate::errors::StorageError::from)
            .and_then(|json| self.store.set(PREDICTION_KEY, &json));
        match written {
            Ok(()) => {
                tracing::info!(salary = prediction.predicted_salary, "prediction stored");
                Outcome::Success(prediction)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to store prediction");
                Outcome::Error(STORAGE_FAILURE.to_string())
            }
        }
    }
}
