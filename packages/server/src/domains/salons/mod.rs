//! Salons domain - read-only directory of provider listings

pub mod activities;
pub mod data;
pub mod errors;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod placeholders;

// Re-export commonly used types
pub use data::{SalonDetail, SalonSummary, SearchParams};
pub use errors::SalonError;
pub use filter::SalonFilter;
pub use models::{Address, BusinessHours, DayHours, Salon};
pub use normalize::SalonNormalizer;
pub use placeholders::{DistanceEstimator, PlaceholderDistance, PlaceholderRating, RatingEstimator};
