// src/credentials/mod.rs

//! Credential resolution.
//!
//! Exactly one [`CredentialSource`] is used per run; there is no merging
//! or precedence between sources. Every source yields a [`Credentials`]
//! value holding exactly the keys the caller asked for.

#[cfg(feature = "aws")]
pub mod secrets;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// API key for the OpenWeather API.
pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
/// Access key id for the object store.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Secret access key for the object store.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// API key for the scores API.
pub const API_KEY: &str = "API_KEY";

/// Resolved key material for one run. Read-only after creation.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    values: BTreeMap<String, String>,
}

impl Credentials {
    /// Look up a key, failing with `MissingCredential` if it is absent
    /// or empty.
    pub fn get(&self, key: &str) -> Result<&str> {
        match self.values.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(AppError::missing_credential(key)),
        }
    }

    /// Keys held by this value, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Build a `Credentials` holding exactly `required` out of `map`.
    ///
    /// Fails with `MissingCredential` naming the first required key that
    /// is absent or empty.
    pub fn from_map(map: BTreeMap<String, String>, required: &[&str]) -> Result<Self> {
        let mut values = BTreeMap::new();
        for key in required {
            match map.get(*key) {
                Some(value) if !value.is_empty() => {
                    values.insert((*key).to_string(), value.clone());
                }
                _ => return Err(AppError::missing_credential(*key)),
            }
        }
        Ok(Self { values })
    }
}

/// Where credentials come from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Process environment variables.
    Env,
    /// A `.env` file loaded into the process environment first. Without
    /// an explicit path, a missing `.env` falls back to the bare
    /// environment.
    DotEnv { path: Option<PathBuf> },
    /// An AWS Secrets Manager secret holding a JSON object.
    #[cfg(feature = "aws")]
    SecretsManager { secret_name: String, region: String },
}

impl CredentialSource {
    /// Resolve the required keys from this source.
    pub async fn resolve(&self, required: &[&str]) -> Result<Credentials> {
        match self {
            Self::Env => from_env(required),
            Self::DotEnv { path } => {
                match path {
                    Some(path) => {
                        dotenvy::from_path(path).map_err(|e| {
                            AppError::config(format!(
                                "failed to load env file {}: {}",
                                path.display(),
                                e
                            ))
                        })?;
                    }
                    None => {
                        let _ = dotenvy::dotenv();
                    }
                }
                from_env(required)
            }
            #[cfg(feature = "aws")]
            Self::SecretsManager {
                secret_name,
                region,
            } => secrets::from_secrets_manager(secret_name, region, required).await,
        }
    }
}

/// Read each required key from the process environment.
fn from_env(required: &[&str]) -> Result<Credentials> {
    let mut values = BTreeMap::new();
    for key in required {
        let value = std::env::var(key).unwrap_or_default();
        if value.is_empty() {
            return Err(AppError::missing_credential(*key));
        }
        values.insert((*key).to_string(), value);
    }
    Ok(Credentials { values })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    // Environment mutation is unsafe in edition 2024; tests touching it
    // run #[serial].
    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) }
    }

    #[tokio::test]
    #[serial]
    async fn env_source_returns_required_keys() {
        set_env(OPENWEATHER_API_KEY, "k1");
        set_env(AWS_ACCESS_KEY_ID, "ak");
        set_env(AWS_SECRET_ACCESS_KEY, "sk");

        let creds = CredentialSource::Env
            .resolve(&[OPENWEATHER_API_KEY, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY])
            .await
            .unwrap();

        assert_eq!(creds.get(OPENWEATHER_API_KEY).unwrap(), "k1");
        assert_eq!(creds.get(AWS_ACCESS_KEY_ID).unwrap(), "ak");
        assert_eq!(creds.get(AWS_SECRET_ACCESS_KEY).unwrap(), "sk");
        assert_eq!(creds.keys().count(), 3);

        remove_env(OPENWEATHER_API_KEY);
        remove_env(AWS_ACCESS_KEY_ID);
        remove_env(AWS_SECRET_ACCESS_KEY);
    }

    #[tokio::test]
    #[serial]
    async fn env_source_names_the_missing_key() {
        remove_env(OPENWEATHER_API_KEY);

        let err = CredentialSource::Env
            .resolve(&[OPENWEATHER_API_KEY])
            .await
            .unwrap_err();

        match err {
            AppError::MissingCredential(key) => assert_eq!(key, OPENWEATHER_API_KEY),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[tokio::test]
    #[serial]
    async fn env_source_rejects_empty_values() {
        set_env(API_KEY, "");

        let err = CredentialSource::Env.resolve(&[API_KEY]).await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential(key) if key == API_KEY));

        remove_env(API_KEY);
    }

    #[tokio::test]
    #[serial]
    async fn dotenv_file_populates_the_environment() {
        remove_env(API_KEY);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{API_KEY}=from-dotenv").unwrap();

        let creds = CredentialSource::DotEnv {
            path: Some(file.path().to_path_buf()),
        }
        .resolve(&[API_KEY])
        .await
        .unwrap();

        assert_eq!(creds.get(API_KEY).unwrap(), "from-dotenv");

        remove_env(API_KEY);
    }

    #[tokio::test]
    #[serial]
    async fn dotenv_source_fails_on_missing_explicit_file() {
        let err = CredentialSource::DotEnv {
            path: Some(PathBuf::from("/nonexistent/.env")),
        }
        .resolve(&[API_KEY])
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn from_map_keeps_exactly_the_required_keys() {
        let mut map = BTreeMap::new();
        map.insert(API_KEY.to_string(), "k".to_string());
        map.insert("UNRELATED".to_string(), "x".to_string());

        let creds = Credentials::from_map(map, &[API_KEY]).unwrap();
        assert_eq!(creds.get(API_KEY).unwrap(), "k");
        assert!(creds.get("UNRELATED").is_err());
        assert_eq!(creds.keys().count(), 1);
    }

    #[test]
    fn from_map_names_the_missing_key() {
        let err = Credentials::from_map(BTreeMap::new(), &[AWS_ACCESS_KEY_ID]).unwrap_err();
        assert!(matches!(err, AppError::MissingCredential(key) if key == AWS_ACCESS_KEY_ID));
    }
}
