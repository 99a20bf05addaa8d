use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

/// Shared construction of outbound HTTP clients
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Build a client whose every request is bounded by `timeout`.
    pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {}", e)))
    }

    /// Cut a response body down for log and error messages.
    pub fn excerpt(body: &str) -> String {
        const LIMIT: usize = 200;
        if body.chars().count() > LIMIT {
            format!("{}...", body.chars().take(LIMIT).collect::<String>())
        } else {
            body.to_string()
        }
    }
}
