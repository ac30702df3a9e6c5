// src/pipeline/weather.rs

//! Weather snapshot pipeline: fetch current conditions, store as JSON.

use log::info;

use crate::error::Result;
use crate::fetch::WeatherSource;
use crate::publish::{ObjectSink, PublishReceipt};

/// Fetch the current weather for `city` and store the payload under `key`.
///
/// Strictly sequential; the first failing step aborts the run. The
/// payload is forwarded verbatim, no fields are inspected.
pub async fn run_weather(
    source: &dyn WeatherSource,
    sink: &dyn ObjectSink,
    city: &str,
    key: &str,
) -> Result<PublishReceipt> {
    info!("Fetching weather data for {}...", city);
    let payload = source.current(city).await?;
    info!("Weather data fetched successfully.");

    info!("Uploading data to the object store...");
    let receipt = sink.put_json(key, &payload).await?;
    info!("Data uploaded successfully to {}.", receipt.location);

    Ok(receipt)
}
