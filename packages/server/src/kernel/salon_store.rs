//! Postgres-backed salon store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::SalonId;
use crate::domains::salons::filter::SalonFilter;
use crate::domains::salons::models::Salon;
use crate::kernel::BaseSalonStore;

/// Reads provider records from the account system's `users` table
#[derive(Clone)]
pub struct PostgresSalonStore {
    pool: PgPool,
}

impl PostgresSalonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseSalonStore for PostgresSalonStore {
    async fn sample_providers(&self, count: usize) -> Result<Vec<Salon>> {
        Salon::find_random_providers(count as i64, &self.pool).await
    }

    async fn find_providers(&self, filter: &SalonFilter, limit: usize) -> Result<Vec<Salon>> {
        Salon::find_providers_matching(filter, limit as i64, &self.pool).await
    }

    async fn find_provider(&self, id: SalonId) -> Result<Option<Salon>> {
        Salon::find_provider_by_id(id, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
