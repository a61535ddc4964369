use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::kernel::BaseSalonStore;
use crate::server::app::AxumAppState;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: StoreHealth,
}

#[derive(Serialize)]
pub struct StoreHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StoreHealth {
    fn from_ping(outcome: Result<(), String>) -> Self {
        match outcome {
            Ok(()) => Self {
                status: "ok",
                error: None,
            },
            Err(error) => Self {
                status: "error",
                error: Some(error),
            },
        }
    }
}

async fn ping_store(store: &dyn BaseSalonStore) -> Result<(), String> {
    tokio::time::timeout(PING_TIMEOUT, store.ping())
        .await
        .map_err(|_| format!("Query timeout (>{}s)", PING_TIMEOUT.as_secs()))?
        .map_err(|e| format!("Query failed: {}", e))
}

/// `GET /health`: 200 when the salon store answers a ping, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let outcome = ping_store(state.server_deps.salon_store.as_ref()).await;

    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let overall = if outcome.is_ok() { "healthy" } else { "unhealthy" };

    (
        status,
        Json(HealthResponse {
            status: overall,
            database: StoreHealth::from_ping(outcome),
        }),
    )
}
