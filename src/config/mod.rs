//! Configuration management for ddsm-diaries
//!
//! Settings come from a TOML file or from `DDSM_*` environment variables.
//! Every section has defaults, so a file only needs the values it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::diary::Roster;
use crate::holiday::client::DEFAULT_BASE_URL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bank holiday API
    pub api: ApiConfig,

    /// Names printed on the recording diary
    pub roster: RosterConfig,

    /// Connectivity probe
    pub internet: InternetConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Bank holiday REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root
    pub base_url: String,

    /// ISO 3166-1 country code
    pub country_code: String,

    /// ISO 3166-2 subdivision holidays must apply to
    pub subdivision: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Retries after the first failed request
    pub max_retries: u32,
}

/// Compilers and assistants for each team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub decani_compiler: String,
    pub decani_assistant: String,
    pub cantoris_compiler: String,
    pub cantoris_assistant: String,
}

/// Connectivity probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetConfig {
    /// Hosts tried in order
    pub hosts: Vec<String>,

    /// TCP port to connect to
    pub port: u16,

    /// Per-host connect timeout in milliseconds
    pub connect_timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let hosts = env_string("DDSM_INTERNET_HOSTS")
            .map(|v| {
                v.split(',')
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.internet.hosts);

        Ok(Self {
            api: ApiConfig {
                base_url: env_string("DDSM_API_URL").unwrap_or(defaults.api.base_url),
                country_code: env_string("DDSM_COUNTRY_CODE").unwrap_or(defaults.api.country_code),
                subdivision: env_string("DDSM_SUBDIVISION").unwrap_or(defaults.api.subdivision),
                request_timeout_secs: env_parse("DDSM_REQUEST_TIMEOUT")
                    .unwrap_or(defaults.api.request_timeout_secs),
                max_retries: env_parse("DDSM_MAX_RETRIES").unwrap_or(defaults.api.max_retries),
            },
            roster: RosterConfig {
                decani_compiler: env_string("DDSM_DECANI_COMPILER").unwrap_or_default(),
                decani_assistant: env_string("DDSM_DECANI_ASSISTANT").unwrap_or_default(),
                cantoris_compiler: env_string("DDSM_CANTORIS_COMPILER").unwrap_or_default(),
                cantoris_assistant: env_string("DDSM_CANTORIS_ASSISTANT").unwrap_or_default(),
            },
            internet: InternetConfig {
                hosts,
                port: env_parse("DDSM_INTERNET_PORT").unwrap_or(defaults.internet.port),
                connect_timeout_ms: env_parse("DDSM_CONNECT_TIMEOUT_MS")
                    .unwrap_or(defaults.internet.connect_timeout_ms),
            },
            logging: LoggingConfig {
                level: env_string("DDSM_LOG_LEVEL").unwrap_or(defaults.logging.level),
                format: env_string("DDSM_LOG_FORMAT").unwrap_or(defaults.logging.format),
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise from the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            anyhow::bail!("api.base_url must be an http(s) URL, got '{}'", self.api.base_url);
        }

        if self.api.country_code.trim().is_empty() {
            anyhow::bail!("api.country_code cannot be empty");
        }

        if self.api.request_timeout_secs == 0 {
            anyhow::bail!("api.request_timeout_secs must be greater than 0");
        }

        if self.internet.hosts.is_empty() {
            anyhow::bail!("internet.hosts must list at least one host");
        }

        if self.internet.connect_timeout_ms == 0 {
            anyhow::bail!("internet.connect_timeout_ms must be greater than 0");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("logging.format must be 'text' or 'json', got '{}'", self.logging.format);
        }

        Ok(())
    }
}

impl ApiConfig {
    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl RosterConfig {
    /// Roster for the recording diary
    pub fn to_roster(&self) -> Roster {
        Roster::new(
            self.decani_compiler.trim(),
            self.decani_assistant.trim(),
            self.cantoris_compiler.trim(),
            self.cantoris_assistant.trim(),
        )
    }
}

impl InternetConfig {
    /// Connect timeout as Duration
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            country_code: String::from("GB"),
            subdivision: String::from("GB-ENG"),
            request_timeout_secs: 10,
            max_retries: 2,
        }
    }
}

impl Default for InternetConfig {
    fn default() -> Self {
        Self {
            hosts: ["google.com", "amazon.com", "facebook.com", "apple.com"]
                .into_iter()
                .map(String::from)
                .collect(),
            port: 80,
            connect_timeout_ms: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.subdivision, "GB-ENG");
        assert_eq!(config.internet.hosts.len(), 4);
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.api.base_url = String::from("date.nager.at");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = String::from("xml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [roster]
            decani_compiler = "Alice"

            [internet]
            port = 443
            "#,
        )
        .unwrap();

        assert_eq!(config.roster.decani_compiler, "Alice");
        assert_eq!(config.internet.port, 443);
        assert_eq!(config.internet.connect_timeout_ms, 3000);
        assert_eq!(config.api.country_code, "GB");
    }

    #[test]
    fn test_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.internet.connect_timeout(), Duration::from_millis(3000));
    }
}
