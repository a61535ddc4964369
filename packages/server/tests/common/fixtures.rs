//! Test fixtures for creating provider records.

use salon_core::domains::salons::models::Salon;
pub use salon_core::kernel::test_dependencies::salon_fixture;

/// A provider serving `services_for` in `city` offering `categories`
pub fn provider(name: &str, services_for: &[&str], categories: &[&str], city: &str) -> Salon {
    let mut salon = salon_fixture(name);
    salon.services_for = services_for.iter().map(|s| s.to_string()).collect();
    salon.business_categories = categories.iter().map(|s| s.to_string()).collect();
    salon.address.city = Some(city.to_string());
    salon
}

/// `count` interchangeable providers
pub fn providers(count: usize) -> Vec<Salon> {
    (0..count)
        .map(|i| salon_fixture(&format!("Salon {}", i)))
        .collect()
}

/// A record from the same table that is not a provider
pub fn customer(name: &str) -> Salon {
    let mut salon = salon_fixture(name);
    salon.role = "customer".to_string();
    salon
}
