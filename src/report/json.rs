use serde::Serialize;

use crate::model::profile::RatingProfile;
use crate::report::{BatchSummary, PlayerReport};

#[derive(Debug, Serialize)]
struct BatchDocument<'a> {
    tool: &'static str,
    version: &'static str,
    profile: &'a RatingProfile,
    summary: &'a BatchSummary,
    players: &'a [PlayerReport],
}

pub fn render_player_json(report: &PlayerReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_batch_json(
    reports: &[PlayerReport],
    summary: &BatchSummary,
    profile: &RatingProfile,
) -> serde_json::Result<String> {
    let doc = BatchDocument {
        tool: "passer-rating",
        version: env!("CARGO_PKG_VERSION"),
        profile,
        summary,
        players: reports,
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
