//! Per-screen state and the text each screen renders.

use std::sync::Arc;

use crate::catalog;
use crate::errors::{FormError, SubmissionError};
use crate::form::{validate, FormState, ValidationResult};
use crate::presenter::DisplayModel;
use crate::storage::SessionStore;
use crate::submission::{
    HealthStatus, Outcome, SubmissionCoordinator, SubmissionStatus, Transport, CONNECTION_ERROR,
};

pub const APP_TITLE: &str = "Your Personal Salary Assistant";
pub const RESULT_HEADING: &str = "Predicted annual salary";
pub const SERVER_UNREACHABLE_MESSAGE: &str =
    "Unable to reach the prediction server. Check your connection and try again.";
const UNSELECTED: &str = "(not selected)";

/// Reachability of the prediction service as shown on the landing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    Online { model_loaded: bool },
    Unreachable,
}

impl ServerStatus {
    pub fn from_health(health: Option<&HealthStatus>) -> Self {
        match health {
            Some(health) => ServerStatus::Online {
                model_loaded: health.model_loaded(),
            },
            None => ServerStatus::Unreachable,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ServerStatus::Online { model_loaded: true } => "online, model loaded",
            ServerStatus::Online {
                model_loaded: false,
            } => "online, model not loaded",
            ServerStatus::Unreachable => "unreachable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingView {
    pub server_status: ServerStatus,
}

impl LandingView {
    pub fn lines(&self) -> Vec<String> {
        vec![
            APP_TITLE.to_string(),
            format!("Server status: {}", self.server_status.describe()),
        ]
    }
}

/// Snapshot of the data-entry screen handed to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntryView {
    pub form: FormState,
    pub message: Option<String>,
    /// The submit control is inert while a request is in flight.
    pub submit_enabled: bool,
}

impl DataEntryView {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![APP_TITLE.to_string()];
        for (definition, value) in self.form.entries() {
            let shown = definition.display_label_for(value).unwrap_or(UNSELECTED);
            lines.push(format!("  {} [{}]: {}", definition.label, definition.key, shown));
        }
        if let Some(message) = &self.message {
            lines.push(format!("Error: {}", message));
        }
        lines
    }
}

pub fn result_lines(display: &DisplayModel) -> Vec<String> {
    vec![
        APP_TITLE.to_string(),
        RESULT_HEADING.to_string(),
        display.amount.clone(),
        display.unit.clone(),
    ]
}

/// Whether a submit attempt moved the flow forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Succeeded,
    Stayed,
}

/// Maps a failure reason to the text shown under the form.
pub fn failure_message(reason: &str) -> String {
    if reason == CONNECTION_ERROR {
        SERVER_UNREACHABLE_MESSAGE.to_string()
    } else {
        reason.to_string()
    }
}

/// Data-entry screen instance. Created fresh on every navigation to the
/// screen and dropped when leaving it.
pub struct DataEntryScreen {
    form: FormState,
    message: Option<String>,
    coordinator: SubmissionCoordinator,
}

impl DataEntryScreen {
    pub fn mount(transport: Arc<dyn Transport>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            form: FormState::new(),
            message: None,
            coordinator: SubmissionCoordinator::new(transport, store),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.coordinator.status()
    }

    pub fn view(&self) -> DataEntryView {
        DataEntryView {
            form: self.form.clone(),
            message: self.message.clone(),
            submit_enabled: !self.coordinator.is_in_flight(),
        }
    }

    /// Applies one field change. A successful change clears any displayed
    /// error; a rejected one leaves the screen untouched.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let value = match catalog::find(key) {
            Some(definition) if !value.is_empty() => definition.resolve(value).unwrap_or(value),
            _ => value,
        };
        self.form = self.form.update(key, value)?;
        self.message = None;
        Ok(())
    }

    pub async fn submit(&mut self) -> SubmitResult {
        let validation = validate(&self.form);
        if let ValidationResult::Missing(missing) = &validation {
            tracing::debug!(?missing, "submit blocked by missing fields");
            self.message = validation.message().map(str::to_string);
            return SubmitResult::Stayed;
        }

        match self.coordinator.submit(&self.form).await {
            Ok(Outcome::Success(_)) => {
                self.message = None;
                SubmitResult::Succeeded
            }
            Ok(Outcome::Error(reason)) => {
                self.message = Some(failure_message(&reason));
                SubmitResult::Stayed
            }
            Err(SubmissionError::InFlight) => {
                tracing::debug!("submit ignored while a request is in flight");
                SubmitResult::Stayed
            }
            Err(err) => {
                tracing::debug!(error = %err, "submit refused");
                SubmitResult::Stayed
            }
        }
    }
}
