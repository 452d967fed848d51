use crate::cli::screens::{DataEntryView, LandingView};
use crate::errors::AppError;
use crate::presenter::DisplayModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingAction {
    Start,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataEntryAction {
    Set { key: String, value: String },
    Submit,
    Back,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    TryAgain,
    Quit,
}

/// Source of user decisions for each screen.
///
/// The application loop owns navigation and state; implementations only
/// display views and report what the user chose.
pub trait Interaction {
    fn landing(&mut self, view: &LandingView) -> Result<LandingAction, AppError>;

    fn data_entry(&mut self, view: &DataEntryView) -> Result<DataEntryAction, AppError>;

    fn result(&mut self, display: &DisplayModel) -> Result<ResultAction, AppError>;

    /// Called right before a request is sent.
    fn submitting(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    /// Reports a rejected input without leaving the current screen.
    fn warn(&mut self, message: &str) -> Result<(), AppError>;
}
