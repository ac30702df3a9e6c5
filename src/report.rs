// src/report.rs

//! Match report extraction and message rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Fixed first line of every scores message.
pub const MESSAGE_HEADER: &str = "Today's English Premier League Scores:";

/// Full-time result for a single fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub home_team: String,
    pub away_team: String,
    pub home_score: i64,
    pub away_score: i64,
}

impl MatchReport {
    /// Render this report as one message line.
    pub fn to_line(&self) -> String {
        format!(
            "{} vs {} - {}:{}",
            self.home_team, self.away_team, self.home_score, self.away_score
        )
    }
}

/// Extract match reports from a decoded scores payload, in received order.
///
/// Any absent or ill-typed field fails with `MalformedPayload` naming the
/// full field path; entries are never skipped or defaulted.
pub fn collect_matches(payload: &Value) -> Result<Vec<MatchReport>> {
    let matches = payload
        .get("matches")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::malformed("matches"))?;

    matches
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let prefix = format!("matches[{i}]");
            Ok(MatchReport {
                home_team: string_at(entry, &prefix, "homeTeam.name")?,
                away_team: string_at(entry, &prefix, "awayTeam.name")?,
                home_score: number_at(entry, &prefix, "score.fullTime.homeTeam")?,
                away_score: number_at(entry, &prefix, "score.fullTime.awayTeam")?,
            })
        })
        .collect()
}

/// Render the notification message: header plus one line per match, every
/// line newline-terminated. An empty list yields the header only.
pub fn render_message(reports: &[MatchReport]) -> String {
    let mut message = format!("{MESSAGE_HEADER}\n");
    for report in reports {
        message.push_str(&report.to_line());
        message.push('\n');
    }
    message
}

fn value_at<'a>(entry: &'a Value, prefix: &str, path: &str) -> Result<&'a Value> {
    let mut current = entry;
    for segment in path.split('.') {
        current = current
            .get(segment)
            .ok_or_else(|| AppError::malformed(format!("{prefix}.{path}")))?;
    }
    Ok(current)
}

fn string_at(entry: &Value, prefix: &str, path: &str) -> Result<String> {
    value_at(entry, prefix, path)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::malformed(format!("{prefix}.{path}")))
}

fn number_at(entry: &Value, prefix: &str, path: &str) -> Result<i64> {
    value_at(entry, prefix, path)?
        .as_i64()
        .ok_or_else(|| AppError::malformed(format!("{prefix}.{path}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn match_entry(home: &str, away: &str, home_score: i64, away_score: i64) -> Value {
        json!({
            "homeTeam": {"name": home},
            "awayTeam": {"name": away},
            "score": {"fullTime": {"homeTeam": home_score, "awayTeam": away_score}}
        })
    }

    #[test]
    fn renders_single_match_message_exactly() {
        let payload = json!({"matches": [match_entry("A", "B", 2, 1)]});
        let reports = collect_matches(&payload).unwrap();
        assert_eq!(
            render_message(&reports),
            "Today's English Premier League Scores:\nA vs B - 2:1\n"
        );
    }

    #[test]
    fn produces_one_line_per_match_plus_header_in_input_order() {
        let payload = json!({"matches": [
            match_entry("Arsenal", "Chelsea", 3, 0),
            match_entry("Everton", "Fulham", 1, 1),
            match_entry("Luton", "Wolves", 0, 2),
        ]});
        let reports = collect_matches(&payload).unwrap();
        let message = render_message(&reports);

        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], MESSAGE_HEADER);
        assert_eq!(lines[1], "Arsenal vs Chelsea - 3:0");
        assert_eq!(lines[3], "Luton vs Wolves - 0:2");
    }

    #[test]
    fn empty_match_list_yields_header_only() {
        let payload = json!({"matches": []});
        let reports = collect_matches(&payload).unwrap();
        assert_eq!(render_message(&reports), format!("{MESSAGE_HEADER}\n"));
    }

    #[test]
    fn missing_matches_list_is_malformed() {
        let err = collect_matches(&json!({"count": 0})).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(path) if path == "matches"));
    }

    #[test]
    fn missing_score_field_names_the_full_path() {
        let mut entry = match_entry("A", "B", 2, 1);
        entry["score"]["fullTime"]
            .as_object_mut()
            .unwrap()
            .remove("homeTeam");
        let payload = json!({"matches": [match_entry("X", "Y", 0, 0), entry]});

        let err = collect_matches(&payload).unwrap_err();
        match err {
            AppError::MalformedPayload(path) => {
                assert_eq!(path, "matches[1].score.fullTime.homeTeam");
            }
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn null_score_is_malformed_not_defaulted() {
        let mut entry = match_entry("A", "B", 2, 1);
        entry["score"]["fullTime"]["awayTeam"] = Value::Null;
        let payload = json!({"matches": [entry]});

        let err = collect_matches(&payload).unwrap_err();
        assert!(
            matches!(err, AppError::MalformedPayload(path) if path == "matches[0].score.fullTime.awayTeam")
        );
    }

    #[test]
    fn missing_team_name_names_the_full_path() {
        let payload = json!({"matches": [{
            "homeTeam": {},
            "awayTeam": {"name": "B"},
            "score": {"fullTime": {"homeTeam": 0, "awayTeam": 0}}
        }]});

        let err = collect_matches(&payload).unwrap_err();
        assert!(
            matches!(err, AppError::MalformedPayload(path) if path == "matches[0].homeTeam.name")
        );
    }
}
