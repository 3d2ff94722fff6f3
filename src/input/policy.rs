use rust_decimal::Decimal;
use tracing::warn;

use crate::input::{RatingError, parse_number};
use crate::model::stats::{PassingStats, RawPassingInput, StatField, secondary_fields};

/// What to do with a secondary field (everything except attempts) that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondaryPolicy {
    /// Treat the value as 0 and record the field as defaulted.
    #[default]
    ZeroOnInvalid,
    /// Fail with `InvalidInput` naming the field.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryValue {
    pub value: Decimal,
    pub defaulted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStats {
    pub stats: PassingStats,
    pub defaulted: Vec<StatField>,
}

pub fn parse_attempts(raw: &str) -> Result<Decimal, RatingError> {
    let attempts = parse_number(raw).ok_or(RatingError::InvalidInput {
        field: StatField::Attempts,
    })?;
    check_attempts(attempts)
}

pub fn check_attempts(attempts: Decimal) -> Result<Decimal, RatingError> {
    if attempts > Decimal::ZERO {
        Ok(attempts)
    } else {
        Err(RatingError::NoAttempts)
    }
}

pub fn parse_secondary(
    raw: &str,
    field: StatField,
    policy: SecondaryPolicy,
) -> Result<SecondaryValue, RatingError> {
    match (parse_number(raw), policy) {
        (Some(value), _) => Ok(SecondaryValue {
            value,
            defaulted: false,
        }),
        (None, SecondaryPolicy::ZeroOnInvalid) => Ok(SecondaryValue {
            value: Decimal::ZERO,
            defaulted: true,
        }),
        (None, SecondaryPolicy::Reject) => Err(RatingError::InvalidInput { field }),
    }
}

/// Attempts are validated first, so a bad attempts value wins over bad secondaries.
pub fn parse_stats(
    input: &RawPassingInput,
    policy: SecondaryPolicy,
) -> Result<ParsedStats, RatingError> {
    let attempts = parse_attempts(&input.attempts)?;
    let mut stats = PassingStats::with_attempts(attempts);
    let mut defaulted = Vec::new();

    for &field in secondary_fields() {
        let parsed = parse_secondary(input.raw(field), field, policy)?;
        if parsed.defaulted {
            warn!(
                player = %input.player,
                field = field.column(),
                raw = input.raw(field),
                "unparseable value treated as 0"
            );
            defaulted.push(field);
        }
        stats.set(field, parsed.value);
    }

    Ok(ParsedStats { stats, defaulted })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/policy.rs"]
mod tests;
