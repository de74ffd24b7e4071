//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Advisory error: {0}")]
    Advisory(#[from] advisory_client::AdvisoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Input(String),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
