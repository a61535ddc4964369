//! Server dependencies for activities (using traits for testability)
//!
//! Central container handed to every salon activity. The store and both
//! placeholder estimators sit behind traits so tests can swap them.

use std::sync::Arc;

use crate::domains::salons::normalize::SalonNormalizer;
use crate::domains::salons::placeholders::{
    DistanceEstimator, PlaceholderDistance, PlaceholderRating, RatingEstimator,
};
use crate::kernel::BaseSalonStore;

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub salon_store: Arc<dyn BaseSalonStore>,
    /// Placeholder until review aggregates exist
    pub rating: Arc<dyn RatingEstimator>,
    /// Placeholder until caller geolocation exists
    pub distance: Arc<dyn DistanceEstimator>,
}

impl ServerDeps {
    pub fn new(
        salon_store: Arc<dyn BaseSalonStore>,
        rating: Arc<dyn RatingEstimator>,
        distance: Arc<dyn DistanceEstimator>,
    ) -> Self {
        Self {
            salon_store,
            rating,
            distance,
        }
    }

    /// Dependencies with the random rating and distance placeholders
    pub fn with_placeholders(salon_store: Arc<dyn BaseSalonStore>) -> Self {
        Self::new(
            salon_store,
            Arc::new(PlaceholderRating),
            Arc::new(PlaceholderDistance),
        )
    }

    pub fn normalizer(&self) -> SalonNormalizer<'_> {
        SalonNormalizer::new(self.rating.as_ref(), self.distance.as_ref())
    }
}
