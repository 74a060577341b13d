//! Client configuration.
//!
//! Defaults point at a backend running locally. Environment variables
//! override them; the CLI can override the base URL again on top.

use std::time::Duration;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

pub const BASE_URL_ENV: &str = "SMART_ASSIGN_API_URL";
pub const TIMEOUT_ENV: &str = "SMART_ASSIGN_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Without trailing slash, e.g. `http://localhost:8000/api`
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self::default().with_base_url(base_url).with_timeout(timeout)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the candidate list endpoint.
    pub fn all_candidates_url(&self) -> String {
        format!("{}/all-candidates", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(
            config.all_candidates_url(),
            "http://localhost:8000/api/all-candidates"
        );
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_base_url("https://assign.example.org/api/");
        assert_eq!(
            config.all_candidates_url(),
            "https://assign.example.org/api/all-candidates"
        );
    }
}
