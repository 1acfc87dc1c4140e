//! Compose error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Creation error: {0}")]
    Creation(#[from] crate::creation::CreationError),

    #[error("Scaffold error: {0}")]
    Scaffold(#[from] crate::creation::ScaffoldError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
