use thiserror::Error;

/// Failures raised while editing the in-memory form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown field: `{0}`")]
    InvalidKey(String),
    #[error("Value `{value}` is not allowed for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// Raised when a screen transition is requested from the wrong screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Cannot {action} from the {from} screen")]
    InvalidTransition {
        action: &'static str,
        from: &'static str,
    },
}

/// Session storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Configuration loading and persistence failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid configuration value for `{key}`: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("Unable to determine a configuration directory")]
    NoBaseDir,
}

/// Errors reported by the prediction transport. Every variant is presented to
/// the user as a connection error.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reasons a submission request is refused before reaching the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Form is incomplete")]
    Incomplete,
    #[error("A submission is already in flight")]
    InFlight,
    #[error("This submission has already completed")]
    Completed,
}

/// Top-level error returned by the interactive application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
