//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::DEFAULT_POLL_TIME;
use crate::errors::ConfigError;

/// Environment variable name for the bot API base URL
pub const BOT_API_URL_ENV: &str = "MYTEAM_BOT_API_URL";
/// Environment variable name for the bot API token
pub const BOT_API_TOKEN_ENV: &str = "MYTEAM_BOT_API_TOKEN";

/// Client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: ApiConfig,
    pub poll: PollConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    pub url: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PollConfig {
    pub time_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                url: "https://myteam.mail.ru/bot/v1".to_string(),
                token: String::new(),
            },
            poll: PollConfig {
                time_seconds: DEFAULT_POLL_TIME,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables, on top of the defaults
    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(url) = std::env::var(BOT_API_URL_ENV) {
            config.api.url = url;
        }
        if let Ok(token) = std::env::var(BOT_API_TOKEN_ENV) {
            config.api.token = token;
        }
        if let Ok(poll) = std::env::var("MYTEAM_POLL_TIME") {
            if let Ok(t) = poll.parse() {
                config.poll.time_seconds = t;
            }
        }

        config
    }

    /// Token must be present before a client can be built from this config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.token.is_empty() {
            return Err(ConfigError::MissingField("api.token".to_string()));
        }
        if self.api.url.is_empty() {
            return Err(ConfigError::MissingField("api.url".to_string()));
        }
        Ok(())
    }
}

/// Source of bot credentials, queried again on every `update_settings`
pub trait BotApiSettings: Send + Sync {
    fn token(&self) -> String;

    fn api_url(&self) -> String;
}

impl BotApiSettings for Config {
    fn token(&self) -> String {
        self.api.token.clone()
    }

    fn api_url(&self) -> String {
        self.api.url.clone()
    }
}

/// Settings backed by a YAML file, re-read on each query so edits are
/// picked up without restarting the caller
pub struct FileSettings {
    path: PathBuf,
    fallback: Config,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback: Config::load_env(),
        }
    }

    fn current(&self) -> Config {
        match Config::load(&self.path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to reload {}: {}, using env/defaults", self.path.display(), e);
                self.fallback.clone()
            }
        }
    }
}

impl BotApiSettings for FileSettings {
    fn token(&self) -> String {
        self.current().api.token
    }

    fn api_url(&self) -> String {
        self.current().api.url
    }
}
