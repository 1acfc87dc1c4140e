use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunCommandError {
    #[error("Command timed out after {0} seconds")]
    Timeout(u64),

    #[error("Working directory not found: {0}")]
    MissingDirectory(String),

    #[error("Failed to spawn command: {0}")]
    SpawnFailed(String),

    #[error("Command exited with code {code}")]
    NonZeroExit { code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
