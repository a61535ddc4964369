//! Projection of stored provider records into client-facing listings.

use chrono::Weekday;

use crate::domains::salons::data::{SalonDetail, SalonSummary};
use crate::domains::salons::models::{Address, Salon, UNISEX};
use crate::domains::salons::placeholders::{DistanceEstimator, RatingEstimator};

/// Shown when a salon has no business images.
pub const FALLBACK_IMAGE_URL: &str = "https://images.pexels.com/photos/1813272/pexels-photo-1813272.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

/// Day whose hours are summarised in list results.
pub const DEFAULT_REFERENCE_DAY: Weekday = Weekday::Mon;

pub struct SalonNormalizer<'a> {
    rating: &'a dyn RatingEstimator,
    distance: &'a dyn DistanceEstimator,
    reference_day: Weekday,
}

impl<'a> SalonNormalizer<'a> {
    pub fn new(rating: &'a dyn RatingEstimator, distance: &'a dyn DistanceEstimator) -> Self {
        Self {
            rating,
            distance,
            reference_day: DEFAULT_REFERENCE_DAY,
        }
    }

    pub fn with_reference_day(mut self, day: Weekday) -> Self {
        self.reference_day = day;
        self
    }

    /// List-view projection.
    pub fn summarize(&self, salon: &Salon) -> SalonSummary {
        SalonSummary {
            id: salon.id.to_string(),
            name: salon.business_name.clone(),
            service_type: resolve_type(&salon.services_for),
            rating: self.rating(salon),
            address: format_address(&salon.address),
            hours: salon.hours().for_day(self.reference_day).summary(),
            distance: self.distance(salon),
            image: salon
                .business_images
                .first()
                .cloned()
                .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
        }
    }

    /// Detail-view projection.
    pub fn detail(&self, salon: Salon) -> SalonDetail {
        let rating = self.rating(&salon);
        let distance = self.distance(&salon);
        let hours = salon.hours().weekly();

        SalonDetail {
            id: salon.id.to_string(),
            service_type: resolve_type(&salon.services_for),
            name: salon.business_name,
            rating,
            address: salon.address,
            hours,
            distance,
            images: salon.business_images,
            menu_images: salon.menu_images,
            certificates: salon.certificates,
            categories: salon.business_categories,
            services_for: salon.services_for,
            service_location: salon.service_location,
            description: salon.description,
            email: salon.email,
            phone: salon.phone,
            services: salon.services,
            created_at: salon.created_at,
            updated_at: salon.updated_at,
        }
    }

    fn rating(&self, salon: &Salon) -> f64 {
        (self.rating.rating(salon) * 100.0).round() / 100.0
    }

    fn distance(&self, salon: &Salon) -> String {
        format!("{:.1} km", self.distance.distance_km(salon))
    }
}

/// "Unisex" if listed, else the first clientele tag, else "Unisex".
pub fn resolve_type(services_for: &[String]) -> String {
    if services_for.iter().any(|s| s == UNISEX) {
        return UNISEX.to_string();
    }
    services_for
        .first()
        .cloned()
        .unwrap_or_else(|| UNISEX.to_string())
}

/// `"<address>, <city>, <state> <zip>"`; missing parts render empty.
pub fn format_address(address: &Address) -> String {
    format!(
        "{}, {}, {} {}",
        address.address.as_deref().unwrap_or_default(),
        address.city.as_deref().unwrap_or_default(),
        address.state.as_deref().unwrap_or_default(),
        address.zip.as_deref().unwrap_or_default(),
    )
}
