//! # Front-end configuration
//!
//! [`AppConfig`] is the single configuration object of the web front-end.
//! It can be written as TOML:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"   # Mantrify API root
//!
//! [app]
//! name = "mantrify"
//! environment = "production"           # development | testing | production
//!
//! [logging]
//! level = "debug"                      # optional override
//! ```
//!
//! A browser bundle has no runtime environment, so the web binary builds its
//! config with [`AppConfig::from_env_with`] over compile-time variables
//! (`MANTRIFY_API_BASE_URL`, `MANTRIFY_ENV`, `MANTRIFY_LOG_LEVEL`).
//!
//! All sections derive `Default`; a missing section means the default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

pub const ENV_API_BASE_URL: &str = "MANTRIFY_API_BASE_URL";
pub const ENV_ENVIRONMENT: &str = "MANTRIFY_ENV";
pub const ENV_LOG_LEVEL: &str = "MANTRIFY_LOG_LEVEL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid API base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
    #[error("Unknown environment '{0}'")]
    UnknownEnvironment(String),
    #[error("Unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Deployment environment. Drives the default log verbosity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSection {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub environment: Environment,
}

fn default_app_name() -> String {
    "mantrify".to_string()
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: Environment::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Overlay variables from `lookup` on top of the defaults.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.api.base_url = url.trim().to_string();
        }
        if let Some(env) = lookup(ENV_ENVIRONMENT).filter(|v| !v.trim().is_empty()) {
            config.app.environment = env.parse()?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            config.logging.level = Some(level.trim().to_ascii_lowercase());
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(url.clone()));
        }
        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::UnknownLogLevel(level.clone()));
            }
        }
        Ok(())
    }

    /// API root without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Effective log level name: the explicit override, else debug in
    /// development and info everywhere else.
    pub fn log_level(&self) -> &str {
        if let Some(level) = &self.logging.level {
            return level;
        }
        match self.app.environment {
            Environment::Development => "debug",
            Environment::Testing | Environment::Production => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:3000");
        assert_eq!(config.app.environment, Environment::Production);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://api.mantrify.app".to_string();
        config.app.environment = Environment::Testing;
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("environment = \"testing\""));
        assert_eq!(AppConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml("[app]\nenvironment = \"development\"\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let err = AppConfig::from_toml("[api]\nbase_url = \"localhost:3000\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_from_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_API_BASE_URL, "https://api.example.com/"),
            (ENV_ENVIRONMENT, "Development"),
            (ENV_LOG_LEVEL, "WARN"),
        ]);
        let config =
            AppConfig::from_env_with(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api_base_url(), "https://api.example.com");
        assert_eq!(config.app.environment, Environment::Development);
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_from_env_rejects_unknown_environment() {
        let err = AppConfig::from_env_with(|key| {
            (key == ENV_ENVIRONMENT).then(|| "staging".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment(_)));
    }

    #[test]
    fn test_from_env_empty_is_default() {
        assert_eq!(AppConfig::from_env_with(|_| None).unwrap(), AppConfig::default());
    }
}
