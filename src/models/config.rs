//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Subject line attached to every score notification.
pub const DEFAULT_SUBJECT: &str = "Premier League Game Day Scores";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Weather pipeline settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Notification pipeline settings
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Credential source selection
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::config("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == Some(0) {
            return Err(AppError::config("fetch.timeout_secs must be > 0 when set"));
        }
        if self.weather.city.trim().is_empty() {
            return Err(AppError::config("weather.city is empty"));
        }
        if self.weather.object_key.trim().is_empty() {
            return Err(AppError::config("weather.object_key is empty"));
        }
        if self.notify.subject.trim().is_empty() {
            return Err(AppError::config("notify.subject is empty"));
        }
        if self.credentials.region.trim().is_empty() {
            return Err(AppError::config("credentials.region is empty"));
        }
        if self.credentials.source == SourceKind::SecretsManager
            && self.credentials.secret_name.is_none()
        {
            return Err(AppError::config(
                "credentials.secret_name is required for the secrets-manager source",
            ));
        }
        Ok(())
    }
}

/// HTTP fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; unset leaves the transport unbounded
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Base URL of the weather API
    #[serde(default = "defaults::weather_base_url")]
    pub weather_base_url: String,

    /// Full URL of the scores API endpoint
    #[serde(default)]
    pub scores_endpoint: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
            weather_base_url: defaults::weather_base_url(),
            scores_endpoint: None,
        }
    }
}

/// Weather pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// City to fetch current conditions for
    #[serde(default = "defaults::city")]
    pub city: String,

    /// Object-store bucket receiving the payload
    #[serde(default)]
    pub bucket: Option<String>,

    /// Object key written on every run
    #[serde(default = "defaults::object_key")]
    pub object_key: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            city: defaults::city(),
            bucket: None,
            object_key: defaults::object_key(),
        }
    }
}

/// Notification pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Topic receiving the rendered message
    #[serde(default)]
    pub topic_arn: Option<String>,

    /// Subject line for every notification
    #[serde(default = "defaults::subject")]
    pub subject: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            topic_arn: None,
            subject: defaults::subject(),
        }
    }
}

/// Credential source selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Which source to resolve credentials from
    #[serde(default)]
    pub source: SourceKind,

    /// Explicit `.env` path for the dotenv source
    #[serde(default)]
    pub dotenv_path: Option<PathBuf>,

    /// Secret name for the secrets-manager source
    #[serde(default)]
    pub secret_name: Option<String>,

    /// AWS region for remote lookups and the object store
    #[serde(default = "defaults::region")]
    pub region: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            dotenv_path: None,
            secret_name: None,
            region: defaults::region(),
        }
    }
}

/// Supported credential sources. Exactly one is used per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Process environment variables
    #[default]
    Env,
    /// A `.env` file loaded into the environment first
    Dotenv,
    /// An AWS Secrets Manager secret holding a JSON object
    SecretsManager,
}

mod defaults {
    use super::DEFAULT_SUBJECT;

    pub fn user_agent() -> String {
        "apicast/0.1".into()
    }
    pub fn weather_base_url() -> String {
        "http://api.openweathermap.org/data/2.5".into()
    }
    pub fn city() -> String {
        "London".into()
    }
    pub fn object_key() -> String {
        "weather_data.json".into()
    }
    pub fn subject() -> String {
        DEFAULT_SUBJECT.into()
    }
    pub fn region() -> String {
        "us-east-1".into()
    }
}
