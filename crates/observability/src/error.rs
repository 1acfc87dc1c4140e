//! Error types for observability crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber was already installed, or installing failed
    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),

    /// The log level directive could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}
