//! football-data API client.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::fetch::{ScoreSource, decode_response};

/// Client for the configured match-score endpoint.
///
/// Authenticates with an `X-Auth-Token` header and returns the decoded
/// body verbatim.
pub struct FootballDataClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl FootballDataClient {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ScoreSource for FootballDataClient {
    async fn latest(&self) -> Result<Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .header("X-Auth-Token", &self.api_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}
