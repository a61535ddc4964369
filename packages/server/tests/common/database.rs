//! Postgres harness for exercising `PostgresSalonStore` against real SQL.
//!
//! One container is started on first use and shared by every test. Each
//! harness gets its own freshly created database holding an empty `users`
//! table, so row counts never leak between tests.

use anyhow::{Context, Result};
use salon_core::domains::salons::models::Salon;
use salon_core::kernel::PostgresSalonStore;
use sqlx::types::Json;
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

/// The slice of the account system's `users` table this service reads.
const USERS_TABLE: &str = r#"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    business_name TEXT NOT NULL,
    role TEXT NOT NULL,
    services_for TEXT[] NOT NULL DEFAULT '{}',
    business_categories TEXT[] NOT NULL DEFAULT '{}',
    address JSONB NOT NULL DEFAULT '{}',
    service_location TEXT,
    business_hours JSONB,
    business_images TEXT[] NOT NULL DEFAULT '{}',
    menu_images TEXT[] NOT NULL DEFAULT '{}',
    certificates TEXT[] NOT NULL DEFAULT '{}',
    description TEXT,
    email TEXT,
    phone TEXT,
    services JSONB,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

struct SharedPostgres {
    admin_url: String,
    base_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();

impl SharedPostgres {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let base_url = format!("postgresql://postgres:postgres@{}:{}", host, port);

        Ok(Self {
            admin_url: format!("{}/postgres", base_url),
            base_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_POSTGRES
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared Postgres container")
            })
            .await
    }
}

/// A private database with an empty `users` table.
///
/// ```ignore
/// #[test_context(DatabaseHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &DatabaseHarness) {
///     ctx.insert(&[salon_fixture("Shop")]).await;
///     let found = ctx.store().find_providers(&SalonFilter::any_provider(), 20).await;
/// }
/// ```
pub struct DatabaseHarness {
    pub db_pool: PgPool,
}

impl AsyncTestContext for DatabaseHarness {
    async fn setup() -> Self {
        Self::new()
            .await
            .expect("Failed to create database harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl DatabaseHarness {
    pub async fn new() -> Result<Self> {
        let shared = SharedPostgres::get().await;
        let name = format!("salons_{}", Uuid::new_v4().simple());

        let admin = PgPool::connect(&shared.admin_url)
            .await
            .context("Failed to connect to admin database")?;
        sqlx::query(&format!("CREATE DATABASE {}", name))
            .execute(&admin)
            .await
            .with_context(|| format!("Failed to create database {}", name))?;
        admin.close().await;

        let db_pool = PgPool::connect(&format!("{}/{}", shared.base_url, name))
            .await
            .context("Failed to connect to test database")?;
        sqlx::raw_sql(USERS_TABLE)
            .execute(&db_pool)
            .await
            .context("Failed to create users table")?;

        Ok(Self { db_pool })
    }

    pub fn store(&self) -> PostgresSalonStore {
        PostgresSalonStore::new(self.db_pool.clone())
    }

    /// Write `salons` into `users` as the account system would.
    pub async fn insert(&self, salons: &[Salon]) {
        for salon in salons {
            sqlx::query(
                r#"
                INSERT INTO users (
                    id, business_name, role, services_for, business_categories,
                    address, service_location, business_hours, business_images,
                    menu_images, certificates, description, email, phone,
                    services, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
                "#,
            )
            .bind(salon.id)
            .bind(&salon.business_name)
            .bind(&salon.role)
            .bind(&salon.services_for)
            .bind(&salon.business_categories)
            .bind(Json(&salon.address))
            .bind(&salon.service_location)
            .bind(&salon.business_hours)
            .bind(&salon.business_images)
            .bind(&salon.menu_images)
            .bind(&salon.certificates)
            .bind(&salon.description)
            .bind(&salon.email)
            .bind(&salon.phone)
            .bind(&salon.services)
            .bind(salon.created_at)
            .bind(salon.updated_at)
            .execute(&self.db_pool)
            .await
            .expect("Failed to insert salon");
        }
    }
}
