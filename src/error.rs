// src/error.rs

//! Unified error handling for the apicast pipelines.

use std::fmt;

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required credential key absent or empty
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Remote secrets-manager lookup failed
    #[error("Secret retrieval failed: {0}")]
    SecretRetrieval(String),

    /// Data API answered outside the 2xx range
    #[error("Fetch failed: {status} - {body}")]
    FetchStatus { status: u16, body: String },

    /// Transport-level failure before any status was received
    #[error("Fetch failed: {0}")]
    FetchTransport(#[from] reqwest::Error),

    /// Expected field absent in fetched data
    #[error("Malformed payload: missing '{0}'")]
    MalformedPayload(String),

    /// Object-store upload or notification publish failed
    #[error("Publish failed: {0}")]
    Publish(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a missing-credential error naming the absent key.
    pub fn missing_credential(key: impl Into<String>) -> Self {
        Self::MissingCredential(key.into())
    }

    /// Create a secret-retrieval error.
    pub fn secret_retrieval(message: impl fmt::Display) -> Self {
        Self::SecretRetrieval(message.to_string())
    }

    /// Create a malformed-payload error naming the missing field path.
    pub fn malformed(path: impl Into<String>) -> Self {
        Self::MalformedPayload(path.into())
    }

    /// Create a publish error from the underlying cause.
    pub fn publish(message: impl fmt::Display) -> Self {
        Self::Publish(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
