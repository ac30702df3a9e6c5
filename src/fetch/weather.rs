//! OpenWeather API client.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::fetch::{WeatherSource, decode_response};

/// Client for the OpenWeather current-weather endpoint.
///
/// Requests `{base}/weather?q={city}&appid={api_key}` and returns the
/// decoded body verbatim.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<Value> {
        let url = format!("{}/weather", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}
