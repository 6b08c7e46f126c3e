//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON. The chart responses
//! are chart-ready data structures, never markup: the browser client feeds
//! them straight into its plotting library.

use serde::{Deserialize, Serialize};

use crate::analytics::GroupCount;
use crate::dataset::LaunchRecord;

// ============================================
// DASHBOARD METADATA DTOs
// ============================================

/// GET /api/v1/dashboard response: everything the page needs to build
/// its controls before the first chart request
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Dropdown options: the `ALL` sentinel plus each distinct site
    pub site_options: Vec<SiteOption>,
    /// Payload bounds observed in the dataset (initial slider value)
    pub payload_min: f64,
    pub payload_max: f64,
    /// Fixed slider configuration
    pub slider: SliderConfig,
    /// Total number of launch records loaded
    pub record_count: usize,
}

/// One dropdown option
#[derive(Debug, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Range-slider configuration
#[derive(Debug, Serialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Tick-mark positions along the slider
    pub marks: Vec<f64>,
}

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the success pie chart
#[derive(Debug, Deserialize)]
pub struct PieParams {
    /// Site selection; `ALL` or one site name
    #[serde(default = "default_site")]
    pub site: String,
}

/// Query parameters for the payload/outcome scatter chart
#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    /// Site selection; `ALL` or one site name
    #[serde(default = "default_site")]
    pub site: String,
    /// Lower payload bound (kg); defaults to the slider minimum
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound (kg); defaults to the slider maximum
    #[serde(default)]
    pub high: Option<f64>,
}

fn default_site() -> String {
    crate::dataset::types::ALL_SITES.to_string()
}

/// Success pie chart response
#[derive(Debug, Serialize)]
pub struct PieChartResponse {
    /// Chart title
    pub title: String,
    /// Pie slices; empty when nothing matches the selection
    pub slices: Vec<PieSlice>,
}

/// One pie slice
#[derive(Debug, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

impl From<GroupCount> for PieSlice {
    fn from(group: GroupCount) -> Self {
        Self {
            label: group.key,
            value: group.count,
        }
    }
}

/// Payload/outcome scatter chart response
#[derive(Debug, Serialize)]
pub struct ScatterResponse {
    /// Scatter points; empty when nothing matches the selection
    pub points: Vec<ScatterPoint>,
}

/// One scatter point: payload mass on x, outcome class on y,
/// booster category as the color dimension
#[derive(Debug, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// 1 = success, 0 = failure
    pub outcome_class: u8,
    pub booster_version_category: String,
    /// Extra hover context for the client
    pub launch_site: String,
    pub flight_number: u32,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome.class(),
            booster_version_category: record.booster_version_category.clone(),
            launch_site: record.launch_site.clone(),
            flight_number: record.flight_number,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Number of records loaded
    pub record_count: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
