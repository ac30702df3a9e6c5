// src/pipeline/scores.rs

//! Score notification pipeline: fetch, render, notify.

use log::info;

use crate::error::Result;
use crate::fetch::ScoreSource;
use crate::publish::Notifier;
use crate::report;

/// Fetch the latest scores, render the message and publish it.
///
/// Returns the rendered message. A malformed payload aborts the run
/// before anything is published.
pub async fn run_scores(
    source: &dyn ScoreSource,
    notifier: &dyn Notifier,
    subject: &str,
) -> Result<String> {
    info!("Fetching match scores...");
    let payload = source.latest().await?;

    let matches = report::collect_matches(&payload)?;
    let message = report::render_message(&matches);
    info!("Rendered {} match line(s).", matches.len());

    let receipt = notifier.notify(subject, &message).await?;
    info!("Notification sent to {}.", receipt.location);

    Ok(message)
}
