pub mod calculator;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;

pub use calculator::{compute, compute_with, rate, rate_numbers, rate_with};
pub use input::RatingError;
pub use input::policy::SecondaryPolicy;
pub use model::components::WeightedComponents;
pub use model::profile::RatingProfile;
pub use model::rating::{Rating, RatingBreakdown};
pub use model::stats::{PassingStats, RawPassingInput, StatField};
