//! Advisory API client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to fetch advisory: {status_text}")]
    Fetch { status: u16, status_text: String },

    #[error("{message}")]
    Subscription { status: u16, message: String },
}
