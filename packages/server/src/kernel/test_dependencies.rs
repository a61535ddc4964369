// TestDependencies - in-memory implementations for testing
//
// Provides a salon store and deterministic estimators that can be injected
// into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::{Arc, Mutex};

use super::{BaseSalonStore, ServerDeps};
use crate::common::SalonId;
use crate::domains::salons::filter::SalonFilter;
use crate::domains::salons::models::{Address, Salon, PROVIDER_ROLE};
use crate::domains::salons::placeholders::{DistanceEstimator, RatingEstimator};

// =============================================================================
// In-memory Salon Store
// =============================================================================

#[derive(Clone)]
pub struct InMemorySalonStore {
    salons: Vec<Salon>,
    failure: Option<String>,
    search_calls: Arc<Mutex<Vec<(SalonFilter, usize)>>>,
}

impl InMemorySalonStore {
    pub fn new(salons: Vec<Salon>) -> Self {
        Self {
            salons,
            failure: None,
            search_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    /// Filters and limits passed to `find_providers`
    pub fn search_calls(&self) -> Vec<(SalonFilter, usize)> {
        self.search_calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }

    fn providers(&self) -> impl Iterator<Item = &Salon> {
        self.salons.iter().filter(|salon| salon.is_provider())
    }
}

#[async_trait]
impl BaseSalonStore for InMemorySalonStore {
    async fn sample_providers(&self, count: usize) -> Result<Vec<Salon>> {
        self.check()?;
        Ok(fastrand::choose_multiple(self.providers().cloned(), count))
    }

    async fn find_providers(&self, filter: &SalonFilter, limit: usize) -> Result<Vec<Salon>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((filter.clone(), limit));
        self.check()?;
        Ok(self
            .salons
            .iter()
            .filter(|salon| filter.matches(salon))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_provider(&self, id: SalonId) -> Result<Option<Salon>> {
        self.check()?;
        Ok(self.providers().find(|salon| salon.id == id).cloned())
    }

    async fn ping(&self) -> Result<()> {
        self.check()
    }
}

// =============================================================================
// Fixed Estimators
// =============================================================================

/// Rating estimator that always returns the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedRating(pub f64);

impl RatingEstimator for FixedRating {
    fn rating(&self, _salon: &Salon) -> f64 {
        self.0
    }
}

/// Distance estimator that always returns the same value (km)
#[derive(Debug, Clone, Copy)]
pub struct FixedDistance(pub f64);

impl DistanceEstimator for FixedDistance {
    fn distance_km(&self, _salon: &Salon) -> f64 {
        self.0
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A fully populated provider record
pub fn salon_fixture(name: &str) -> Salon {
    let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    Salon {
        id: SalonId::new(),
        business_name: name.to_string(),
        role: PROVIDER_ROLE.to_string(),
        services_for: vec!["Unisex".to_string()],
        business_categories: vec!["Haircut".to_string()],
        address: Address {
            address: Some("100 Congress Ave".to_string()),
            street: Some("Congress Ave".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip: Some("78701".to_string()),
            country: Some("USA".to_string()),
        },
        service_location: Some("In salon".to_string()),
        business_hours: Some(json!({
            "Monday": {"open": true, "start": "9:00 AM", "end": "7:00 PM"},
            "Sunday": {"open": false, "start": "", "end": ""}
        })),
        business_images: vec!["https://cdn.example.com/salon/front.jpg".to_string()],
        menu_images: vec!["https://cdn.example.com/salon/menu.jpg".to_string()],
        certificates: vec!["https://cdn.example.com/salon/license.jpg".to_string()],
        description: Some(format!("{} is a neighbourhood salon.", name)),
        email: Some("hello@example.com".to_string()),
        phone: Some("+15125550100".to_string()),
        services: Some(json!([{"name": "Haircut", "price": 30}])),
        created_at: timestamp,
        updated_at: timestamp,
    }
}

impl ServerDeps {
    /// Dependencies over `store` with rating 4.5 and distance 2.0 km
    pub fn for_tests(store: InMemorySalonStore) -> Self {
        Self::new(
            Arc::new(store),
            Arc::new(FixedRating(4.5)),
            Arc::new(FixedDistance(2.0)),
        )
    }
}
