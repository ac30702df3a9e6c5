// src/models/mod.rs

//! Configuration models for the apicast pipelines.

mod config;

// Re-export all public types
pub use config::{
    Config, CredentialsConfig, DEFAULT_SUBJECT, FetchConfig, NotifyConfig, SourceKind,
    WeatherConfig,
};
