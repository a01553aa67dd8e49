use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default appcast location for the Hexbit desktop app.
pub const DEFAULT_FEED_URL: &str = "https://hexbit.app/appcast.xml";

/// Static download page used when no release can be resolved.
pub const DEFAULT_FALLBACK_URL: &str = "https://hexbit.app/download";

const DEFAULT_USER_AGENT: &str = concat!("appcast-link/", env!("CARGO_PKG_VERSION"));

/// Site configuration, loadable from a JSON file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// URL of the appcast feed to fetch.
    pub feed_url: String,
    /// Download URL used when no release candidate is found.
    pub fallback_url: String,
    /// User agent sent with the feed request.
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a [`SiteConfig`] from a JSON file; missing fields take defaults.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
