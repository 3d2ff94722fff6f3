use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::profile::RatingProfile;
use crate::model::stats::PassingStats;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedComponents {
    pub completion: Decimal,
    pub yards_per_attempt: Decimal,
    pub touchdown: Decimal,
    pub interception: Decimal,
}

impl WeightedComponents {
    pub fn sum(&self) -> Decimal {
        self.completion + self.yards_per_attempt + self.touchdown + self.interception
    }

    pub fn as_array(&self) -> [Decimal; 4] {
        [
            self.completion,
            self.yards_per_attempt,
            self.touchdown,
            self.interception,
        ]
    }
}

/// Inclusive clamp to `[0, max_weight]`. Negative zero comes back as plain zero.
pub fn clamp_weight(x: Decimal, max_weight: Decimal) -> Decimal {
    if x > max_weight {
        max_weight
    } else if x <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        x
    }
}

// Overflow saturates toward the numerator's sign; attempts is positive here.
fn per_attempt(value: Decimal, attempts: Decimal) -> Decimal {
    value.checked_div(attempts).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

fn percentage(value: Decimal, attempts: Decimal) -> Decimal {
    per_attempt(value, attempts).saturating_mul(Decimal::ONE_HUNDRED)
}

pub fn completion_component(stats: &PassingStats, profile: &RatingProfile) -> Decimal {
    let pct = percentage(stats.completions, stats.attempts);
    clamp_weight(
        pct.saturating_sub(profile.completion_offset)
            .saturating_mul(profile.completion_scale),
        profile.max_weight,
    )
}

pub fn yards_component(stats: &PassingStats, profile: &RatingProfile) -> Decimal {
    let per_att = per_attempt(stats.yards, stats.attempts);
    clamp_weight(
        per_att
            .saturating_sub(profile.yards_offset)
            .saturating_mul(profile.yards_scale),
        profile.max_weight,
    )
}

pub fn touchdown_component(stats: &PassingStats, profile: &RatingProfile) -> Decimal {
    let pct = percentage(stats.touchdowns, stats.attempts);
    clamp_weight(
        pct.saturating_mul(profile.touchdown_scale),
        profile.max_weight,
    )
}

// Clamps the difference, not the raw penalty.
pub fn interception_component(stats: &PassingStats, profile: &RatingProfile) -> Decimal {
    let pct = percentage(stats.interceptions, stats.attempts);
    let penalty = pct.saturating_mul(profile.interception_scale);
    clamp_weight(profile.max_weight.saturating_sub(penalty), profile.max_weight)
}

pub fn weighted_components(stats: &PassingStats, profile: &RatingProfile) -> WeightedComponents {
    WeightedComponents {
        completion: completion_component(stats, profile),
        yards_per_attempt: yards_component(stats, profile),
        touchdown: touchdown_component(stats, profile),
        interception: interception_component(stats, profile),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/components.rs"]
mod tests;
