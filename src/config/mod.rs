//! Application configuration.
//!
//! Values come from `config.toml` when present, overridden by environment
//! variables (loaded through `.env` via dotenvy). A missing file is fine -
//! every section has workable defaults except channel credentials, whose
//! absence just disables live updates.

/// Backend gateway settings
pub mod backend;
/// Real-time channel credentials
pub mod channel;
/// Cache database connection and schema management
pub mod database;

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::errors::{Error, Result};

pub use backend::BackendConfig;
pub use channel::ChannelConfig;

/// The whole configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend gateway settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Real-time channel credentials; absent means no live updates
    pub channel: Option<ChannelConfig>,
}

/// Parses configuration from TOML text.
pub fn from_toml_str(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;
    from_toml_str(&contents)
}

/// Loads the application configuration from the default location
/// (./config.toml), layering environment overrides on top.
pub fn load_app_configuration() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        info!("no config.toml found; using defaults");
        AppConfig::default()
    };

    config.backend.apply_env();
    if let Some(channel) = ChannelConfig::from_env() {
        config.channel = Some(channel);
    }

    Ok(config)
}
