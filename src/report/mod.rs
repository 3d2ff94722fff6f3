pub mod json;
pub mod text;

use serde::Serialize;

use crate::input::RatingError;
use crate::model::rating::RatingBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Outcome for one player, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub player: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Rated(RatingBreakdown),
    Failed(FailureReport),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub error: &'static str,
    pub message: String,
}

impl From<RatingError> for FailureReport {
    fn from(err: RatingError) -> Self {
        Self {
            error: err.kind(),
            message: err.to_string(),
        }
    }
}

impl PlayerReport {
    pub fn new(player: &str, result: Result<RatingBreakdown, RatingError>) -> Self {
        let outcome = match result {
            Ok(breakdown) => Outcome::Rated(breakdown),
            Err(err) => Outcome::Failed(err.into()),
        };
        Self {
            player: player.to_string(),
            line: None,
            outcome,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_rated(&self) -> bool {
        matches!(self.outcome, Outcome::Rated(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub rated: usize,
    pub failed: usize,
    pub best: Option<f64>,
    pub mean: Option<f64>,
}

pub fn summarize(reports: &[PlayerReport]) -> BatchSummary {
    let ratings: Vec<f64> = reports
        .iter()
        .filter_map(|r| match &r.outcome {
            Outcome::Rated(b) => Some(b.rating.value()),
            Outcome::Failed(_) => None,
        })
        .collect();
    let best = ratings.iter().copied().reduce(f64::max);
    let mean = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };
    BatchSummary {
        rows: reports.len(),
        rated: ratings.len(),
        failed: reports.len() - ratings.len(),
        best,
        mean,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
