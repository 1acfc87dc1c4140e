use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Rejected target: {0}")]
    Rejected(String),

    #[error("Host transport failed: {0}")]
    Transport(String),

    #[error("Handler failed: {0}")]
    Handler(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
