// src/lib.rs

//! apicast library
//!
//! Fetches data from public HTTP APIs and publishes it to AWS targets:
//! current weather as a JSON object in S3, match-day scores as an SNS
//! notification.

pub mod credentials;
pub mod error;
pub mod fetch;
#[cfg(feature = "lambda")]
pub mod handler;
pub mod models;
pub mod pipeline;
pub mod publish;
pub mod report;
