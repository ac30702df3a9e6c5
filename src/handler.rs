// src/handler.rs

//! AWS Lambda handler for the score notification pipeline.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::credentials::{API_KEY, CredentialSource};
use crate::error::{AppError, Result};
use crate::fetch::{self, FootballDataClient};
use crate::models::{DEFAULT_SUBJECT, FetchConfig};
use crate::pipeline::run_scores;
use crate::publish::SnsNotifier;

/// Main Lambda handler function.
///
/// Always resolves with an invocation-style result: failures are reported
/// in the body with status 500 instead of being raised to the runtime.
pub async fn handler(event: LambdaEvent<Value>) -> std::result::Result<Value, LambdaError> {
    info!("Handling event: {:?}", event.payload);

    match run_scores_pipeline().await {
        Ok(message) => {
            info!("Notification sent ({} bytes)", message.len());
            Ok(serde_json::json!({
                "statusCode": 200,
                "body": "Notification sent successfully!"
            }))
        }
        Err(e) => {
            error!("Score pipeline failed: {}", e);
            Ok(serde_json::json!({
                "statusCode": 500,
                "body": format!("Error: {}", e)
            }))
        }
    }
}

/// Wire the pipeline from Lambda environment variables and run it.
async fn run_scores_pipeline() -> Result<String> {
    let credentials = CredentialSource::Env.resolve(&[API_KEY]).await?;
    let endpoint =
        std::env::var("API_ENDPOINT").map_err(|_| AppError::config("API_ENDPOINT is not set"))?;
    let topic_arn =
        std::env::var("SNS_TOPIC_ARN").map_err(|_| AppError::config("SNS_TOPIC_ARN is not set"))?;

    let http = fetch::create_client(&FetchConfig::default())?;
    let source = FootballDataClient::new(http, endpoint, credentials.get(API_KEY)?);
    let notifier = SnsNotifier::from_env(topic_arn).await;

    run_scores(&source, &notifier, DEFAULT_SUBJECT).await
}
