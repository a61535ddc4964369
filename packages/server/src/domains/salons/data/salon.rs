use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::salons::models::{Address, WeeklyHours};

/// Query parameters accepted by the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Clientele tag, e.g. "Male", "Female", "Unisex"
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    /// Comma-separated category tags
    pub services: Option<String>,
    pub city: Option<String>,
}

/// Compact listing used by recommendation and search results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalonSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub rating: f64,
    pub address: String,
    pub hours: String,
    pub distance: String,
    pub image: String,
}

/// Full listing returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonDetail {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub rating: f64,
    pub address: Address,
    pub hours: WeeklyHours,
    pub distance: String,
    pub images: Vec<String>,
    pub menu_images: Vec<String>,
    pub certificates: Vec<String>,
    pub categories: Vec<String>,
    pub services_for: Vec<String>,
    pub service_location: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub services: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
