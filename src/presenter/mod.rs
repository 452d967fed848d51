//! Result screen model: reads the stored prediction once and formats it.

use crate::currency::{format_whole_amount, unit_label, LocaleConfig};
use crate::errors::NavigationError;
use crate::navigation::{Location, NavigationController, Screen};
use crate::storage::{SessionStore, PREDICTION_KEY};
use crate::submission::PredictionResult;

pub const DEFAULT_AMOUNT: &str = "45,000";
pub const DEFAULT_UNIT: &str = "USD/YEAR";

/// Values shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub amount: String,
    pub unit: String,
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT.to_string(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

pub struct ResultPresenter {
    prediction: Option<PredictionResult>,
    locale: LocaleConfig,
}

impl ResultPresenter {
    /// Reads the stored prediction. Missing, unreadable or malformed entries
    /// degrade to the default display rather than surfacing an error.
    pub fn mount(store: &dyn SessionStore, locale: LocaleConfig) -> Self {
        let prediction = match store.get(PREDICTION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<PredictionResult>(&raw) {
                Ok(prediction) if is_displayable(&prediction) => Some(prediction),
                Ok(_) => {
                    tracing::debug!("stored prediction is not displayable; using defaults");
                    None
                }
                Err(err) => {
                    tracing::debug!(error = %err, "stored prediction is malformed; using defaults");
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("no stored prediction; using defaults");
                None
            }
            Err(err) => {
                tracing::debug!(error = %err, "session store unreadable; using defaults");
                None
            }
        };
        Self { prediction, locale }
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.prediction.as_ref()
    }

    pub fn render(&self) -> DisplayModel {
        match &self.prediction {
            Some(prediction) => DisplayModel {
                amount: format_whole_amount(&self.locale, prediction.predicted_salary),
                unit: unit_label(&prediction.currency, &prediction.period),
            },
            None => DisplayModel::default(),
        }
    }

    pub fn try_again<L: Location>(
        &self,
        navigation: &mut NavigationController<L>,
    ) -> Result<Screen, NavigationError> {
        navigation.try_again()
    }
}

fn is_displayable(prediction: &PredictionResult) -> bool {
    prediction.predicted_salary.is_finite()
        && !prediction.currency.trim().is_empty()
        && !prediction.period.trim().is_empty()
}
