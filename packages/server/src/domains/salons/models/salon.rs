use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::SalonId;
use crate::domains::salons::filter::SalonFilter;

use super::hours::BusinessHours;

/// Role tag carried by records that represent a bookable business.
pub const PROVIDER_ROLE: &str = "provider";

/// Catch-all clientele tag.
pub const UNISEX: &str = "Unisex";

/// Postal address as stored on the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

/// Provider record from the account store's `users` table.
///
/// Read-only here: records are created and maintained by the account system.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Salon {
    pub id: SalonId,
    pub business_name: String,
    pub role: String,

    // Classification
    pub services_for: Vec<String>,
    pub business_categories: Vec<String>,

    // Location
    #[sqlx(json)]
    pub address: Address,
    pub service_location: Option<String>,

    /// Raw stored hours; either encoding, see [`BusinessHours`].
    pub business_hours: Option<serde_json::Value>,

    // Media
    pub business_images: Vec<String>,
    pub menu_images: Vec<String>,
    pub certificates: Vec<String>,

    // Descriptive
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub services: Option<serde_json::Value>,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Salon {
    pub fn is_provider(&self) -> bool {
        self.role == PROVIDER_ROLE
    }

    pub fn hours(&self) -> BusinessHours {
        BusinessHours::from_stored(self.business_hours.as_ref())
    }

    /// Sample up to `limit` distinct providers uniformly at random
    pub async fn find_random_providers(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let salons = sqlx::query_as::<_, Self>(
            "SELECT * FROM users WHERE role = $1 ORDER BY random() LIMIT $2",
        )
        .bind(PROVIDER_ROLE)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(salons)
    }

    /// Find providers matching a compiled search filter.
    ///
    /// No ORDER BY: result order is whatever the planner returns.
    pub async fn find_providers_matching(
        filter: &SalonFilter,
        limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let salons = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM users
            WHERE role = $1
              AND ($2::text IS NULL OR $2 = ANY(services_for))
              AND ($3::text[] IS NULL OR business_categories && $3)
              AND ($4::text IS NULL OR address->>'city' ILIKE '%' || $4 || '%' ESCAPE '\')
            LIMIT $5
            "#,
        )
        .bind(filter.role())
        .bind(filter.services_for())
        .bind(filter.categories())
        .bind(filter.city_like_fragment())
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(salons)
    }

    /// Find a provider by ID, returning None if absent or not a provider
    pub async fn find_provider_by_id(id: SalonId, pool: &PgPool) -> Result<Option<Self>> {
        let salon =
            sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1 AND role = $2")
                .bind(id)
                .bind(PROVIDER_ROLE)
                .fetch_optional(pool)
                .await?;
        Ok(salon)
    }
}
