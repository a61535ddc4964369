//! Salon listing endpoints.
//!
//! GET /api/salons/recommendations
//! GET /api/salons/search?type=&services=&city=
//! GET /api/salons/:id

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::salons::activities::{get_salon, recommend_salons, search_salons};
use crate::domains::salons::data::{SalonDetail, SalonSummary, SearchParams};
use crate::domains::salons::errors::SalonError;
use crate::server::app::AxumAppState;

impl SalonError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SalonError::NotFound => StatusCode::NOT_FOUND,
            SalonError::InvalidId(_) => StatusCode::BAD_REQUEST,
            SalonError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message; never includes internal error detail
    pub fn public_message(&self) -> &'static str {
        match self {
            SalonError::NotFound => "Salon not found",
            SalonError::InvalidId(_) => "Invalid salon ID",
            SalonError::Internal(_) => "Server error",
        }
    }
}

impl IntoResponse for SalonError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({ "message": self.public_message() })),
        )
            .into_response()
    }
}

/// Ten random listings
pub async fn recommendations_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<SalonSummary>>, SalonError> {
    recommend_salons(&state.server_deps).await.map(Json)
}

/// Filtered listings, at most twenty
pub async fn search_handler(
    Extension(state): Extension<AxumAppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SalonSummary>>, SalonError> {
    search_salons(&params, &state.server_deps).await.map(Json)
}

/// Full detail for one listing
pub async fn salon_detail_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<Json<SalonDetail>, SalonError> {
    get_salon(&id, &state.server_deps).await.map(Json)
}
