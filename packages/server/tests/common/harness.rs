//! Test harness driving the axum router over an in-memory salon store.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use salon_core::domains::salons::models::Salon;
use salon_core::kernel::test_dependencies::InMemorySalonStore;
use salon_core::kernel::ServerDeps;
use salon_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestHarness {
    router: Router,
}

/// Status and parsed JSON body of a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestHarness {
    /// Router over `salons` with fixed rating (4.5) and distance (2.0 km)
    pub fn with_salons(salons: Vec<Salon>) -> Self {
        Self::with_store(InMemorySalonStore::new(salons))
    }

    pub fn with_store(store: InMemorySalonStore) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            router: build_app(ServerDeps::for_tests(store), &[]),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

impl TestResponse {
    /// Body as an array, panicking otherwise.
    pub fn items(&self) -> &Vec<Value> {
        self.body.as_array().expect("Expected a JSON array")
    }
}
