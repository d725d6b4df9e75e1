use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid style value: {0}")]
    InvalidStyleValue(String),

    #[error("Edit range {start}..{end} is outside the buffer (length {len})")]
    EditRange { start: usize, end: usize, len: usize },

    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    #[error("Session error: {0}")]
    Session(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
