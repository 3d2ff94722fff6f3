use serde_json::Value;

use super::*;
use crate::report::summarize;
use crate::report::tests::report_for;

#[test]
fn test_player_json_rated() {
    let report = report_for("Tom", "10", "bad");
    let v: Value = serde_json::from_str(&render_player_json(&report).unwrap()).unwrap();
    assert_eq!(v["player"], "Tom");
    assert_eq!(v["status"], "rated");
    assert_eq!(v["rating"], 39.6);
    assert_eq!(v["components"]["interception"], 2.375);
    assert_eq!(v["defaulted"], serde_json::json!(["completions"]));
    assert!(v.get("line").is_none());
}

#[test]
fn test_player_json_failed() {
    let report = report_for("Tom", "nope", "1");
    let v: Value = serde_json::from_str(&render_player_json(&report).unwrap()).unwrap();
    assert_eq!(v["status"], "failed");
    assert_eq!(v["error"], "invalid_input");
    assert_eq!(v["message"], "Invalid number in Pass Attempts.");
}

#[test]
fn test_batch_json() {
    let reports = vec![report_for("A", "10", "0").at_line(2)];
    let summary = summarize(&reports);
    let body = render_batch_json(&reports, &summary, &RatingProfile::nfl()).unwrap();
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["tool"], "passer-rating");
    assert_eq!(v["profile"]["max_weight"], 2.375);
    assert_eq!(v["summary"]["rated"], 1);
    assert_eq!(v["players"][0]["line"], 2);
    assert_eq!(v["players"][0]["rating"], 39.6);
}
