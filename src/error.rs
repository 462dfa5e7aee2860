//! Error types for the OTD platform client

use thiserror::Error;

/// Main client error type
///
/// Failures stay stringly-typed on purpose: the backend reports problems as a
/// free-form `detail` message and the UI layer only ever shows transient,
/// localized banners.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("not authorized")]
    Unauthorized,

    #[error("server returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether the error is a non-2xx HTTP status with the given code
    pub fn is_status(&self, code: u16) -> bool {
        matches!(self, ApiError::Status { status, .. } if status.as_u16() == code)
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(error: config::ConfigError) -> Self {
        ApiError::Config(error.to_string())
    }
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
