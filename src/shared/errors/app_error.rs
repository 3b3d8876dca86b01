use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream request to {url} failed: {message}")]
    Upstream { url: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Human-readable classification of a failed request attempt. Timeouts and
/// connection refusals are the common cases for the flaky upstreams this
/// gateway talks to, so they get their own wording.
pub fn describe_request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "failed to connect to upstream".to_string()
    } else if let Some(status) = err.status() {
        format!("HTTP {}", status)
    } else {
        err.to_string()
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
