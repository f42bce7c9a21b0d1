//! Real-time channel configuration.
//!
//! The `[channel]` section is optional: a deployment without credentials
//! simply runs without live updates. Environment variables win over the
//! file when both are present.

use serde::Deserialize;

/// Credentials for the real-time channel service.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// Application key issued by the channel service
    pub app_key: String,
    /// Cluster the application lives in, e.g. `"mt1"`
    pub cluster: String,
}

impl ChannelConfig {
    /// Reads credentials from `CHANNEL_APP_KEY` / `CHANNEL_CLUSTER`.
    ///
    /// Returns `None` unless both are set and non-empty - half a credential
    /// pair is treated the same as none.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let app_key = std::env::var("CHANNEL_APP_KEY").ok()?;
        let cluster = std::env::var("CHANNEL_CLUSTER").ok()?;
        if app_key.trim().is_empty() || cluster.trim().is_empty() {
            return None;
        }
        Some(Self { app_key, cluster })
    }
}
