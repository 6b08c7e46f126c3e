//! Dashboard Routes
//!
//! The page itself and the metadata the page needs to build its controls.
//!
//! - GET / - Embedded dashboard page (HTML + Plotly client)
//! - GET /api/v1/dashboard - Dropdown options, payload bounds, slider config

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::dto::{DashboardResponse, SiteOption, SliderConfig};
use crate::api::state::AppState;
use crate::dataset::types::ALL_SITES;

/// Fixed payload-slider range and step (kg)
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;

/// Tick-mark positions along the slider
const SLIDER_MARKS: [f64; 5] = [0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0];

/// GET /
///
/// Serve the dashboard page. The page is compiled into the binary so the
/// server has no runtime asset directory to locate.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

/// GET /api/v1/dashboard
///
/// Control metadata: dropdown options (`ALL` plus each distinct site),
/// the dataset's payload bounds (initial slider value), and the fixed
/// slider configuration.
pub async fn dashboard_meta(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let mut site_options = vec![SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    site_options.extend(state.dataset.sites().iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }));

    Json(DashboardResponse {
        site_options,
        payload_min: state.dataset.min_payload(),
        payload_max: state.dataset.max_payload(),
        slider: SliderConfig {
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
            marks: SLIDER_MARKS.to_vec(),
        },
        record_count: state.dataset.len(),
    })
}
