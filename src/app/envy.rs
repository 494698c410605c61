use serde::Deserialize;

use super::config::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT, DEFAULT_SESSION_IDLE_SECS};
use crate::replicate::config::API_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub replicate_api_token: Option<String>,
    pub replicate_api_url: Option<String>,
    pub replicate_poll_interval_ms: Option<u64>,

    pub session_idle_secs: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// The token from `REPLICATE_API_TOKEN`, ignoring blank values.
    pub fn default_api_token(&self) -> Option<&str> {
        self.replicate_api_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn api_url(&self) -> String {
        match &self.replicate_api_url {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => API_URL.to_string(),
        }
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.replicate_poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
    }

    pub fn session_idle_secs(&self) -> u64 {
        self.session_idle_secs.unwrap_or(DEFAULT_SESSION_IDLE_SECS)
    }
}

#[cfg(test)]
pub fn test_envy(replicate_api_token: Option<&str>) -> Envy {
    Envy {
        app_env: "test".to_string(),
        port: None,
        replicate_api_token: replicate_api_token.map(str::to_string),
        replicate_api_url: None,
        replicate_poll_interval_ms: Some(10),
        session_idle_secs: None,
    }
}
