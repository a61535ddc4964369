//! Salon query activities
//!
//! Each activity issues exactly one store call and normalizes the result.
//! Store failures are logged here with the operation name; callers only see
//! the error category.

use tracing::{debug, error, info};

use crate::common::SalonId;
use crate::domains::salons::data::{SalonDetail, SalonSummary, SearchParams};
use crate::domains::salons::errors::SalonError;
use crate::domains::salons::filter::SalonFilter;
use crate::kernel::ServerDeps;

/// Number of listings in a recommendation set
pub const RECOMMENDATION_COUNT: usize = 10;

/// Maximum number of search results
pub const SEARCH_LIMIT: usize = 20;

/// Random sample of up to ten providers
pub async fn recommend_salons(deps: &ServerDeps) -> Result<Vec<SalonSummary>, SalonError> {
    info!("Getting salon recommendations");

    let salons = deps
        .salon_store
        .sample_providers(RECOMMENDATION_COUNT)
        .await
        .map_err(|e| {
            error!(operation = "recommend_salons", error = %e, "Failed to sample salons");
            SalonError::Internal(e)
        })?;

    let normalizer = deps.normalizer();
    Ok(salons.iter().map(|salon| normalizer.summarize(salon)).collect())
}

/// Providers matching the optional type / services / city filters, at most twenty
pub async fn search_salons(
    params: &SearchParams,
    deps: &ServerDeps,
) -> Result<Vec<SalonSummary>, SalonError> {
    let filter = SalonFilter::compile(params);

    info!(
        service_type = ?filter.services_for(),
        categories = ?filter.categories(),
        city = ?filter.city(),
        "Searching salons"
    );

    let mut salons = deps
        .salon_store
        .find_providers(&filter, SEARCH_LIMIT)
        .await
        .map_err(|e| {
            error!(operation = "search_salons", error = %e, "Failed to search salons");
            SalonError::Internal(e)
        })?;
    salons.truncate(SEARCH_LIMIT);

    let normalizer = deps.normalizer();
    Ok(salons.iter().map(|salon| normalizer.summarize(salon)).collect())
}

/// Full listing for one provider
pub async fn get_salon(salon_id: &str, deps: &ServerDeps) -> Result<SalonDetail, SalonError> {
    let id = SalonId::parse(salon_id).map_err(|e| {
        debug!(salon_id, error = %e, "Rejecting malformed salon ID");
        SalonError::InvalidId(salon_id.to_string())
    })?;

    info!(salon_id = %id, "Getting salon");

    let salon = deps
        .salon_store
        .find_provider(id)
        .await
        .map_err(|e| {
            error!(operation = "get_salon", salon_id = %id, error = %e, "Failed to load salon");
            SalonError::Internal(e)
        })?
        .ok_or(SalonError::NotFound)?;

    Ok(deps.normalizer().detail(salon))
}
