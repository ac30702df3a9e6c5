//! AWS SNS notification sink.

use async_trait::async_trait;
use aws_sdk_sns::Client;
use log::info;

use crate::error::{AppError, Result};
use crate::publish::{Notifier, PublishReceipt};

/// SNS-backed notifier publishing to a single topic.
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    /// Create a notifier over an existing client.
    pub fn new(client: Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    /// Create a notifier from the ambient AWS environment.
    pub async fn from_env(topic_arn: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), topic_arn)
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn notify(&self, subject: &str, message: &str) -> Result<PublishReceipt> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| AppError::publish(e.into_service_error()))?;

        info!("Published notification to {}", self.topic_arn);
        Ok(PublishReceipt::new(self.topic_arn.clone()))
    }
}
