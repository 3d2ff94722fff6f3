pub mod batch;
pub mod policy;

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::stats::StatField;

/// Failures the rating core reports to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("Invalid number in {}.", .field.label())]
    InvalidInput { field: StatField },
    #[error("The player must have at least 1 pass attempt.")]
    NoAttempts,
}

impl RatingError {
    pub fn kind(&self) -> &'static str {
        match self {
            RatingError::InvalidInput { .. } => "invalid_input",
            RatingError::NoAttempts => "no_attempts",
        }
    }
}

/// Parses a plain decimal number: optional sign, digits, group commas, one point.
///
/// Exponents, `inf`, `NaN` and values outside the decimal range are rejected.
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if !body.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
    {
        return None;
    }
    if body.matches('.').count() > 1 {
        return None;
    }
    if let Some(point) = body.find('.') {
        if body[point..].contains(',') {
            return None;
        }
    }
    let digits: String = body.chars().filter(|&c| c != ',').collect();
    let value = Decimal::from_str(&digits).ok()?;
    if trimmed.starts_with('-') {
        Some(-value)
    } else {
        Some(value)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
