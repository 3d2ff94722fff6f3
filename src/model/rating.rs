use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::model::components::WeightedComponents;
use crate::model::profile::RatingProfile;
use crate::model::stats::StatField;

/// Passer rating, already rounded to the profile's decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(Decimal);

impl Rating {
    pub fn from_components(components: &WeightedComponents, profile: &RatingProfile) -> Self {
        let raw = components.sum() / profile.divisor * profile.scale;
        Rating(round_half_even(raw, profile.decimals))
    }

    pub fn decimal(self) -> Decimal {
        self.0
    }

    pub fn value(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Banker's rounding at `decimals` places.
pub fn round_half_even(x: Decimal, decimals: u32) -> Decimal {
    x.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBreakdown {
    pub rating: Rating,
    pub components: WeightedComponents,
    pub defaulted: Vec<StatField>,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rating.rs"]
mod tests;
