// src/publish/mod.rs

//! Publish targets for fetched payloads.
//!
//! Two sinks, never both active in one pipeline: a JSON object store and
//! a notification topic. Both report success through a [`PublishReceipt`];
//! the pipelines keep no other record of a completed publish.

#[cfg(feature = "aws")]
pub mod s3;
#[cfg(feature = "aws")]
pub mod sns;

#[cfg(feature = "aws")]
pub use s3::S3Sink;
#[cfg(feature = "aws")]
pub use sns::SnsNotifier;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use serde_json::Value;

use crate::error::Result;

/// Metadata about a successful publish.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    /// Timestamp of the publish
    pub timestamp: DateTime<Utc>,
    /// Where the data went, e.g. `s3://bucket/key` or a topic ARN
    pub location: String,
}

impl PublishReceipt {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            location: location.into(),
        }
    }
}

/// Sink that stores a JSON payload under a named key.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectSink: Send + Sync {
    /// Serialize the payload and write it at `key`, overwriting any
    /// existing object.
    async fn put_json(&self, key: &str, payload: &Value) -> Result<PublishReceipt>;
}

/// Sink that delivers a message to a notification topic.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish `message` with the given subject line.
    async fn notify(&self, subject: &str, message: &str) -> Result<PublishReceipt>;
}
