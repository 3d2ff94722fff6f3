//! Passer-rating formula entry points.
//!
//! Every function here is pure: the weighted components are returned, never stored.

use tracing::debug;

use crate::input::RatingError;
use crate::input::policy::{SecondaryPolicy, check_attempts, parse_stats};
use crate::model::components::{WeightedComponents, weighted_components};
use crate::model::profile::RatingProfile;
use crate::model::rating::{Rating, RatingBreakdown};
use crate::model::stats::{PassingStats, RawPassingInput};

/// Rates raw text with the NFL profile and the permissive secondary policy.
pub fn compute(input: &RawPassingInput) -> Result<RatingBreakdown, RatingError> {
    compute_with(input, &RatingProfile::nfl(), SecondaryPolicy::ZeroOnInvalid)
}

pub fn compute_with(
    input: &RawPassingInput,
    profile: &RatingProfile,
    policy: SecondaryPolicy,
) -> Result<RatingBreakdown, RatingError> {
    let parsed = parse_stats(input, policy)?;
    let (rating, components) = rate_with(&parsed.stats, profile)?;
    debug!(
        player = %input.player,
        rating = rating.value(),
        components = ?components.as_array(),
        "rating computed"
    );
    Ok(RatingBreakdown {
        rating,
        components,
        defaulted: parsed.defaulted,
    })
}

/// Rates float inputs. Non-finite values fail with `InvalidInput` before the
/// formula runs, so the result always lands in the rating range.
pub fn rate_numbers(
    attempts: f64,
    completions: f64,
    yards: f64,
    touchdowns: f64,
    interceptions: f64,
) -> Result<Rating, RatingError> {
    let stats = PassingStats::from_f64(attempts, completions, yards, touchdowns, interceptions)?;
    rate(&stats)
}

/// Rates already-parsed numbers. Only `NoAttempts` can fail here.
pub fn rate(stats: &PassingStats) -> Result<Rating, RatingError> {
    rate_with(stats, &RatingProfile::nfl()).map(|(rating, _)| rating)
}

pub fn rate_with(
    stats: &PassingStats,
    profile: &RatingProfile,
) -> Result<(Rating, WeightedComponents), RatingError> {
    check_attempts(stats.attempts)?;
    let components = weighted_components(stats, profile);
    let rating = Rating::from_components(&components, profile);
    Ok((rating, components))
}

#[cfg(test)]
#[path = "../tests/src_inline/calculator.rs"]
mod tests;
