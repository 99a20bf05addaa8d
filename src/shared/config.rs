use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://universities.hipolabs.com/search";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "unifinder/0.1";

const API_URL_VAR: &str = "UNIFINDER_API_URL";
const TIMEOUT_VAR: &str = "UNIFINDER_TIMEOUT_SECS";
const USER_AGENT_VAR: &str = "UNIFINDER_USER_AGENT";

/// Connection settings for the university directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Build a config from process environment, falling back to defaults.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DirectoryConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim();
            if url.starts_with("http://") || url.starts_with("https://") {
                config.base_url = url.to_string();
            } else {
                log::warn!(
                    "Ignoring {}='{}': expected an http(s) URL, using {}",
                    API_URL_VAR,
                    url,
                    DEFAULT_API_URL
                );
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_seconds = secs,
                _ => log::warn!(
                    "Ignoring {}='{}': expected a positive number of seconds, using {}",
                    TIMEOUT_VAR,
                    raw,
                    DEFAULT_TIMEOUT_SECONDS
                ),
            }
        }

        if let Some(agent) = lookup(USER_AGENT_VAR) {
            if !agent.trim().is_empty() {
                config.user_agent = agent.trim().to_string();
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
