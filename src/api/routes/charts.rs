//! Chart Routes
//!
//! The two chart-data endpoints behind the dashboard figures. Each request
//! carries the current control values and gets back chart-ready data; an
//! empty selection yields an empty payload with 200, which the client
//! renders as an empty chart.
//!
//! - GET /api/v1/charts/success-pie?site=<sel>
//! - GET /api/v1/charts/success-payload-scatter?site=<sel>&low=<kg>&high=<kg>

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::{payload_outcome_rows, success_counts};
use crate::api::dto::{PieChartResponse, PieParams, ScatterParams, ScatterResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::dashboard::{SLIDER_MAX, SLIDER_MIN};
use crate::api::state::AppState;
use crate::dataset::{PayloadRange, SiteSelection};

/// GET /api/v1/charts/success-pie
///
/// Grouped success counts for the pie chart. With `site=ALL` the groups are
/// launch sites (successful launches only); with a specific site the groups
/// are outcome labels over every launch at that site.
pub async fn success_pie(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PieParams>,
) -> Json<PieChartResponse> {
    let selection = SiteSelection::parse(&params.site);

    let title = match &selection {
        SiteSelection::All => "Total Success Launches By Site".to_string(),
        SiteSelection::Site(site) => format!("Total Success Launches for site {}", site),
    };

    let slices = success_counts(&state.dataset, &selection)
        .into_iter()
        .map(Into::into)
        .collect();

    Json(PieChartResponse { title, slices })
}

/// GET /api/v1/charts/success-payload-scatter
///
/// Filtered launch records for the payload/outcome scatter chart. Bounds are
/// strict-exclusive; omitted bounds default to the full slider range.
pub async fn payload_scatter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> ApiResult<Json<ScatterResponse>> {
    let selection = SiteSelection::parse(&params.site);

    let low = params.low.unwrap_or(SLIDER_MIN);
    let high = params.high.unwrap_or(SLIDER_MAX);
    if !low.is_finite() || !high.is_finite() {
        return Err(ApiError::Validation(
            "payload bounds must be finite numbers".to_string(),
        ));
    }
    let range = PayloadRange::new(low, high);

    let points = payload_outcome_rows(&state.dataset, &selection, &range)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ScatterResponse { points }))
}
