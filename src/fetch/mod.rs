// src/fetch/mod.rs

//! HTTP fetch layer for the upstream data APIs.

pub mod scores;
pub mod weather;

pub use scores::FootballDataClient;
pub use weather::OpenWeatherClient;

use std::time::Duration;

use async_trait::async_trait;
#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::FetchConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &FetchConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Decode an HTTP response body into JSON, rejecting non-2xx statuses.
pub fn decode_response(status: u16, body: &str) -> Result<Value> {
    if !(200..300).contains(&status) {
        return Err(AppError::FetchStatus {
            status,
            body: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

/// Source of current weather payloads.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the current weather payload for a city, decoded but
    /// otherwise untouched.
    async fn current(&self, city: &str) -> Result<Value>;
}

/// Source of the latest match-day scores payload.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Fetch the latest scores payload.
    async fn latest(&self) -> Result<Value>;
}
