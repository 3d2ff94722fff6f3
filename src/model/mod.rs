pub mod components;
pub mod profile;
pub mod rating;
pub mod stats;
