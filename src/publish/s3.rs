//! AWS S3 object-store sink.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use log::info;
use serde_json::Value;

use crate::credentials::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, Credentials};
use crate::error::{AppError, Result};
use crate::publish::{ObjectSink, PublishReceipt};

/// S3-backed object sink.
pub struct S3Sink {
    client: Client,
    bucket: String,
}

impl S3Sink {
    /// Create a sink over an existing client.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Create a sink authenticated with explicit access keys from the
    /// resolved credentials.
    pub async fn with_credentials(
        credentials: &Credentials,
        region: &str,
        bucket: impl Into<String>,
    ) -> Result<Self> {
        let access_key = credentials.get(AWS_ACCESS_KEY_ID)?;
        let secret_key = credentials.get(AWS_SECRET_ACCESS_KEY)?;
        let provider = aws_sdk_s3::config::Credentials::from_keys(access_key, secret_key, None);

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(provider)
            .region(aws_sdk_s3::config::Region::new(region.to_string()))
            .load()
            .await;

        Ok(Self::new(Client::new(&config), bucket))
    }

    /// Create a sink from the ambient AWS environment.
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket)
    }
}

#[async_trait]
impl ObjectSink for S3Sink {
    /// Write the payload as JSON text. Overwrites any existing object at
    /// the key; re-publishing identical input is idempotent.
    async fn put_json(&self, key: &str, payload: &Value) -> Result<PublishReceipt> {
        let json = serde_json::to_string(payload)?;
        let bytes = ByteStream::from(json.into_bytes());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(bytes)
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| AppError::publish(e.into_service_error()))?;

        let location = format!("s3://{}/{}", self.bucket, key);
        info!("Uploaded payload to {}", location);
        Ok(PublishReceipt::new(location))
    }
}
