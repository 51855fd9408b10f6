use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Environment fallback for the provider api key.
pub const API_KEY_ENV: &str = "QUOTEBOT_API_KEY";

/// Configuration failures raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config prefix must not be empty")]
    MissingPrefix,

    #[error("no api key in config file or {API_KEY_ENV}")]
    MissingApiKey,
}

/// On-disk configuration shape. Credentials stay out of the repository; the
/// api key may come from the environment instead of the file.
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    prefix: String,
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    chat_token: Option<String>,
}

/// Validated bot configuration, passed into the pipeline at construction
/// time. No process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub prefix: String,
    pub api_key: String,
    /// Chat-platform credential, consumed by the platform gateway when one
    /// is attached. The console gateway has no use for it.
    pub chat_token: Option<String>,
}

impl BotConfig {
    /// Loads and validates configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let parsed: RawConfig = serde_json::from_str(&raw)?;
        Self::from_raw(parsed)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        if raw.prefix.is_empty() {
            return Err(ConfigError::MissingPrefix);
        }

        let api_key = raw
            .api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            prefix: raw.prefix,
            api_key,
            chat_token: raw.chat_token,
        })
    }
}
