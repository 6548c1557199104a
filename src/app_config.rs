use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language code passed through to the provider (e.g. "es")
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Full URL of the translate endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key, if the server requires one
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Backoff multiplier for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Delay in milliseconds between consecutive requests
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_target_language() -> String {
    "es".to_string()
}

fn default_endpoint() -> String {
    "https://libretranslate.com/translate".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_rate_limit_delay_ms() -> u64 {
    0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {:?}: {}", path, e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path, e))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("Target language cannot be empty"));
        }

        if !self.provider.endpoint.starts_with("http://")
            && !self.provider.endpoint.starts_with("https://")
        {
            return Err(anyhow!(
                "Provider endpoint must be an http(s) URL: {}",
                self.provider.endpoint
            ));
        }

        if self.provider.timeout_secs == 0 {
            return Err(anyhow!("Provider timeout must be greater than zero"));
        }

        Ok(())
    }
}
