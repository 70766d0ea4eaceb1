//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::calculate::Locale;
use crate::normalize::DEFAULT_CDN_BASE;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Remote ranking service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// API root, with trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Whitelisted client address sent as `X-Forwarded-For`
    #[serde(default)]
    pub forwarded_for: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Keep only ranked and pro-league battles
    #[serde(default = "default_ranked_only")]
    pub ranked_only: bool,
}

fn default_base_url() -> String {
    "https://api.brawlstars.com/v1/".to_string()
}

fn default_token_env() -> String {
    "BRAWLSTARS_API_TOKEN".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_ranked_only() -> bool {
    true
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_env: default_token_env(),
            forwarded_for: None,
            timeout_ms: default_timeout_ms(),
            ranked_only: default_ranked_only(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Presentation settings for summary cards and asset URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,

    #[serde(default = "default_cdn_base")]
    pub cdn_base: String,
}

fn default_cdn_base() -> String {
    DEFAULT_CDN_BASE.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            cdn_base: default_cdn_base(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            remote: RemoteConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.remote.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "Remote timeout must be greater than 0".to_string(),
            ));
        }

        if self.remote.token_env.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Remote token_env must name an environment variable".to_string(),
            ));
        }

        if url::Url::parse(&self.remote.base_url).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Remote base_url is not a valid URL: {}",
                self.remote.base_url
            )));
        }

        Ok(())
    }
}
