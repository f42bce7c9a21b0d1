//! Backend gateway configuration.
//!
//! Loaded from the `[backend]` section of config.toml, with the
//! `BACKEND_URL` environment variable taking precedence over the file so
//! deployments can point at a different API without editing configuration.

use serde::Deserialize;

/// Configuration for the remote REST backend.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. `https://api.example.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Fixed rows-per-page for list views
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl BackendConfig {
    /// Applies environment overrides on top of file values.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("BACKEND_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_page_size() -> usize {
    5
}
