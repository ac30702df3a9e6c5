//! AWS Secrets Manager credential source.
//!
//! The secret value is expected to be a JSON object mapping key names to
//! strings, e.g. `{"OPENWEATHER_API_KEY": "...", "AWS_ACCESS_KEY_ID": ...}`.

use std::collections::BTreeMap;

use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::config::Region;
use log::info;

use super::Credentials;
use crate::error::{AppError, Result};

/// Fetch a JSON secret by name and extract the required keys.
///
/// Remote failures (network, auth, not-found) and a non-object payload
/// surface as `SecretRetrieval`; a decoded object lacking a required key
/// surfaces as `MissingCredential`.
pub async fn from_secrets_manager(
    secret_name: &str,
    region: &str,
    required: &[&str],
) -> Result<Credentials> {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;
    let client = Client::new(&config);

    let output = client
        .get_secret_value()
        .secret_id(secret_name)
        .send()
        .await
        .map_err(|e| AppError::secret_retrieval(e.into_service_error()))?;

    let raw = output.secret_string().ok_or_else(|| {
        AppError::secret_retrieval(format!("secret '{secret_name}' has no string payload"))
    })?;

    let map: BTreeMap<String, String> = serde_json::from_str(raw).map_err(|e| {
        AppError::secret_retrieval(format!("secret '{secret_name}' is not a JSON object: {e}"))
    })?;

    info!("Retrieved secret '{}' from {}", secret_name, region);
    Credentials::from_map(map, required)
}
