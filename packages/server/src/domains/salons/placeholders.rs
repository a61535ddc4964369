//! Rating and distance signals for listings.
//!
//! Neither value is persisted yet. The production estimators draw a fresh
//! random value on every call, so the same salon reports a different rating
//! and distance on each request. That is expected until real review
//! aggregates and geolocation exist; swap the estimator in `ServerDeps` then.

use crate::domains::salons::models::Salon;

pub trait RatingEstimator: Send + Sync {
    /// Rating on a 0-5 scale.
    fn rating(&self, salon: &Salon) -> f64;
}

pub trait DistanceEstimator: Send + Sync {
    /// Distance from the caller, in kilometres.
    fn distance_km(&self, salon: &Salon) -> f64;
}

/// Uniform random rating in [3.0, 5.0].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRating;

impl RatingEstimator for PlaceholderRating {
    fn rating(&self, _salon: &Salon) -> f64 {
        fastrand::f64() * 2.0 + 3.0
    }
}

/// Uniform random distance in [1.0, 10.0] km.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderDistance;

impl DistanceEstimator for PlaceholderDistance {
    fn distance_km(&self, _salon: &Salon) -> f64 {
        fastrand::f64() * 9.0 + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::salon_fixture;

    #[test]
    fn test_placeholder_ranges() {
        let salon = salon_fixture("Range Check");
        for _ in 0..1_000 {
            let rating = PlaceholderRating.rating(&salon);
            assert!((3.0..=5.0).contains(&rating), "rating {}", rating);

            let distance = PlaceholderDistance.distance_km(&salon);
            assert!((1.0..=10.0).contains(&distance), "distance {}", distance);
        }
    }
}
