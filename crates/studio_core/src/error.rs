use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("attachment error: {0}")]
    Attachment(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
