// src/pipeline/mod.rs

//! Pipeline entry points.
//!
//! - `run_weather`: fetch current weather and store it as JSON
//! - `run_scores`: fetch match scores and publish a notification

pub mod scores;
pub mod weather;

pub use scores::run_scores;
pub use weather::run_weather;
