use rust_decimal::Decimal;
use serde::Serialize;

/// Formula constants for the four weighted passing components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingProfile {
    pub max_weight: Decimal,
    pub completion_offset: Decimal,
    pub completion_scale: Decimal,
    pub yards_offset: Decimal,
    pub yards_scale: Decimal,
    pub touchdown_scale: Decimal,
    pub interception_scale: Decimal,
    pub divisor: Decimal,
    pub scale: Decimal,
    pub decimals: u32,
}

impl RatingProfile {
    pub fn nfl() -> Self {
        Self {
            max_weight: Decimal::new(2375, 3),
            completion_offset: Decimal::from(30),
            completion_scale: Decimal::new(5, 2),
            yards_offset: Decimal::from(3),
            yards_scale: Decimal::new(25, 2),
            touchdown_scale: Decimal::new(2, 1),
            interception_scale: Decimal::new(25, 2),
            divisor: Decimal::from(6),
            scale: Decimal::ONE_HUNDRED,
            decimals: 1,
        }
    }
}
