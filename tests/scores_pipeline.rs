//! End-to-end score notification tests against mocked collaborators.

use apicast::error::AppError;
use apicast::fetch::MockScoreSource;
use apicast::pipeline::run_scores;
use apicast::publish::{MockNotifier, PublishReceipt};
use serde_json::json;

const SUBJECT: &str = "Premier League Game Day Scores";

#[tokio::test]
async fn publishes_rendered_message_with_fixed_subject() {
    let mut source = MockScoreSource::new();
    source.expect_latest().return_once(|| {
        Ok(json!({"matches": [{
            "homeTeam": {"name": "A"},
            "awayTeam": {"name": "B"},
            "score": {"fullTime": {"homeTeam": 2, "awayTeam": 1}}
        }]}))
    });

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|subject, message| {
            subject == SUBJECT
                && message == "Today's English Premier League Scores:\nA vs B - 2:1\n"
        })
        .return_once(|_, _| Ok(PublishReceipt::new("arn:aws:sns:eu-west-1:123:scores")));

    let message = run_scores(&source, &notifier, SUBJECT)
        .await
        .expect("pipeline should succeed");
    assert_eq!(
        message,
        "Today's English Premier League Scores:\nA vs B - 2:1\n"
    );
}

#[tokio::test]
async fn empty_match_list_sends_header_only() {
    let mut source = MockScoreSource::new();
    source
        .expect_latest()
        .return_once(|| Ok(json!({"matches": []})));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|_, message| message == "Today's English Premier League Scores:\n")
        .return_once(|_, _| Ok(PublishReceipt::new("arn:aws:sns:eu-west-1:123:scores")));

    let message = run_scores(&source, &notifier, SUBJECT).await.unwrap();
    assert_eq!(message.lines().count(), 1);
}

#[tokio::test]
async fn malformed_payload_aborts_before_notifying() {
    let mut source = MockScoreSource::new();
    source.expect_latest().return_once(|| {
        Ok(json!({"matches": [{
            "homeTeam": {"name": "A"},
            "awayTeam": {"name": "B"},
            "score": {"fullTime": {"awayTeam": 1}}
        }]}))
    });

    let mut notifier = MockNotifier::new();
    notifier.expect_notify().never();

    let err = run_scores(&source, &notifier, SUBJECT).await.unwrap_err();
    match err {
        AppError::MalformedPayload(path) => {
            assert_eq!(path, "matches[0].score.fullTime.homeTeam");
        }
        other => panic!("expected MalformedPayload, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_failure_short_circuits_before_notifying() {
    let mut source = MockScoreSource::new();
    source.expect_latest().return_once(|| {
        Err(AppError::FetchStatus {
            status: 503,
            body: "maintenance".to_string(),
        })
    });

    let mut notifier = MockNotifier::new();
    notifier.expect_notify().never();

    let err = run_scores(&source, &notifier, SUBJECT).await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn notify_failure_surfaces_as_publish_error() {
    let mut source = MockScoreSource::new();
    source
        .expect_latest()
        .return_once(|| Ok(json!({"matches": []})));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .return_once(|_, _| Err(AppError::publish("topic does not exist")));

    let err = run_scores(&source, &notifier, SUBJECT).await.unwrap_err();
    assert!(matches!(err, AppError::Publish(_)));
}
