use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

use crate::input::RatingError;

/// Raw per-game text exactly as an input layer collected it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPassingInput {
    pub player: String,
    pub attempts: String,
    pub completions: String,
    pub yards: String,
    pub touchdowns: String,
    pub interceptions: String,
}

impl RawPassingInput {
    pub fn raw(&self, field: StatField) -> &str {
        match field {
            StatField::Attempts => &self.attempts,
            StatField::Completions => &self.completions,
            StatField::Yards => &self.yards,
            StatField::Touchdowns => &self.touchdowns,
            StatField::Interceptions => &self.interceptions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Attempts,
    Completions,
    Yards,
    Touchdowns,
    Interceptions,
}

impl StatField {
    pub fn label(self) -> &'static str {
        match self {
            StatField::Attempts => "Pass Attempts",
            StatField::Completions => "Pass Completions",
            StatField::Yards => "Passing Yards",
            StatField::Touchdowns => "Passing Touchdowns",
            StatField::Interceptions => "Interceptions",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            StatField::Attempts => "attempts",
            StatField::Completions => "completions",
            StatField::Yards => "yards",
            StatField::Touchdowns => "touchdowns",
            StatField::Interceptions => "interceptions",
        }
    }
}

pub fn secondary_fields() -> &'static [StatField] {
    &[
        StatField::Completions,
        StatField::Yards,
        StatField::Touchdowns,
        StatField::Interceptions,
    ]
}

/// Parsed passing line. `attempts` is strictly positive once it reaches the formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassingStats {
    pub attempts: Decimal,
    pub completions: Decimal,
    pub yards: Decimal,
    pub touchdowns: Decimal,
    pub interceptions: Decimal,
}

impl PassingStats {
    pub fn with_attempts(attempts: Decimal) -> Self {
        Self {
            attempts,
            completions: Decimal::ZERO,
            yards: Decimal::ZERO,
            touchdowns: Decimal::ZERO,
            interceptions: Decimal::ZERO,
        }
    }

    /// Builds stats from floats. NaN, infinities and values outside the decimal
    /// range fail with `InvalidInput` naming the field.
    pub fn from_f64(
        attempts: f64,
        completions: f64,
        yards: f64,
        touchdowns: f64,
        interceptions: f64,
    ) -> Result<Self, RatingError> {
        let mut stats = Self::with_attempts(decimal_from_f64(attempts, StatField::Attempts)?);
        stats.completions = decimal_from_f64(completions, StatField::Completions)?;
        stats.yards = decimal_from_f64(yards, StatField::Yards)?;
        stats.touchdowns = decimal_from_f64(touchdowns, StatField::Touchdowns)?;
        stats.interceptions = decimal_from_f64(interceptions, StatField::Interceptions)?;
        Ok(stats)
    }

    pub fn set(&mut self, field: StatField, value: Decimal) {
        match field {
            StatField::Attempts => self.attempts = value,
            StatField::Completions => self.completions = value,
            StatField::Yards => self.yards = value,
            StatField::Touchdowns => self.touchdowns = value,
            StatField::Interceptions => self.interceptions = value,
        }
    }
}

fn decimal_from_f64(value: f64, field: StatField) -> Result<Decimal, RatingError> {
    if !value.is_finite() {
        return Err(RatingError::InvalidInput { field });
    }
    Decimal::from_f64(value).ok_or(RatingError::InvalidInput { field })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/stats.rs"]
mod tests;
