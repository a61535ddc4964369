// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseSalonStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::SalonId;
use crate::domains::salons::filter::SalonFilter;
use crate::domains::salons::models::Salon;

// =============================================================================
// Salon Store Trait (Infrastructure - read-only provider collection)
// =============================================================================

/// Read access to the provider collection owned by the account system.
///
/// Every method is a single round trip and only ever yields records whose
/// role is "provider".
#[async_trait]
pub trait BaseSalonStore: Send + Sync {
    /// Up to `count` distinct providers, each equally likely to be picked
    async fn sample_providers(&self, count: usize) -> Result<Vec<Salon>>;

    /// Providers matching `filter`, at most `limit` of them, in no particular order
    async fn find_providers(&self, filter: &SalonFilter, limit: usize) -> Result<Vec<Salon>>;

    /// The provider with this id, if it exists
    async fn find_provider(&self, id: SalonId) -> Result<Option<Salon>>;

    /// Connectivity check for the health endpoint
    async fn ping(&self) -> Result<()>;
}
