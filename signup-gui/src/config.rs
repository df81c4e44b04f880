use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing_subscriber::filter::LevelFilter;

use crate::{
    dir::SignupDirectory,
    state::cooldown::{DEFAULT_COOLDOWN, MAX_COOLDOWN},
};

pub const CONFIG_FILE_NAME: &str = "signup.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs))
}

pub fn serialize_duration<S: Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(duration.as_secs())
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_cooldown() -> Duration {
    DEFAULT_COOLDOWN
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Error reading configuration file: {0}")]
    ReadingFile(String),
    #[error("Invalid api_url '{0}': {1}")]
    InvalidApiUrl(String, String),
    #[error("sms_cooldown_secs must be between 1 and 86400")]
    InvalidCooldown,
    #[error("Invalid log_level '{0}'")]
    InvalidLogLevel(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::ReadingFile(e.to_string())
    }
}

/// Settings of the signup application, read from `signup.toml` in the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend exposing `/api/sms` and `/api/user/signup`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(
        rename = "sms_cooldown_secs",
        default = "default_cooldown",
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration"
    )]
    pub sms_cooldown: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: None,
            sms_cooldown: DEFAULT_COOLDOWN,
        }
    }
}

impl Config {
    /// Read the configuration file in the data directory, falling back to the defaults if
    /// there is none.
    pub fn load(datadir: &SignupDirectory) -> Result<Config, ConfigError> {
        match Self::existing_file(datadir) {
            Some(path) => Self::from_file(&path),
            None => Ok(Config::default()),
        }
    }

    /// Path of the configuration file in the data directory, if there is one.
    pub fn existing_file(datadir: &SignupDirectory) -> Option<PathBuf> {
        let path = datadir.config_file_path();
        path.exists().then_some(path)
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<Config>(&content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Make sure the settings are sane.
    pub fn check(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.api_url)
            .map_err(|e| ConfigError::InvalidApiUrl(self.api_url.clone(), e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidApiUrl(
                self.api_url.clone(),
                "scheme must be http or https".to_string(),
            ));
        }
        if self.sms_cooldown.is_zero() || self.sms_cooldown > MAX_COOLDOWN {
            return Err(ConfigError::InvalidCooldown);
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<Option<LevelFilter>, ConfigError> {
        self.log_level
            .as_ref()
            .map(|l| LevelFilter::from_str(l).map_err(|_| ConfigError::InvalidLogLevel(l.clone())))
            .transpose()
    }
}
