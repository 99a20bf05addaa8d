use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Upstream error{}: {message}", .status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default())]
    UpstreamError { status: Option<u16>, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::UpstreamError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by an upstream failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::UpstreamError { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AppError::NetworkError(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::NetworkError("Failed to connect to university directory".to_string())
        } else if let Some(status) = err.status() {
            AppError::upstream(Some(status.as_u16()), format!("HTTP {}: {}", status, err))
        } else if err.is_decode() {
            AppError::upstream(None, format!("Unexpected response shape: {}", err))
        } else if err.is_builder() {
            AppError::ConfigError(format!("Invalid request: {}", err))
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
