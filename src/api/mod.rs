//! Launchboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Embedded dashboard page
//! - `GET /api/v1/dashboard` - Control metadata (sites, payload bounds, slider)
//!
//! ## Charts
//! - `GET /api/v1/charts/success-pie` - Success counts for the pie chart
//! - `GET /api/v1/charts/success-payload-scatter` - Rows for the scatter chart
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use launchboard::api::{serve, ApiConfig, AppState};
//! use launchboard::dataset::LaunchDataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(LaunchDataset::load("data/spacex_launch_dash.csv")?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard metadata
        .route("/dashboard", get(routes::dashboard::dashboard_meta))
        // Chart routes
        .route("/charts/success-pie", get(routes::charts::success_pie))
        .route(
            "/charts/success-payload-scatter",
            get(routes::charts::payload_scatter),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launchboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Launchboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchDataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const FIXTURE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0 B0003,v1.0
2,CCAFS LC-40,1,525,F9 v1.0 B0005,v1.0
3,CCAFS LC-40,1,4700,F9 FT B1026,FT
4,VAFB SLC-4E,1,500,F9 v1.1 B1003,v1.1
5,VAFB SLC-4E,0,9600,F9 FT B1036,FT
6,KSC LC-39A,1,5300,F9 FT B1031,FT
";

    fn create_test_app() -> Router {
        let dataset = Arc::new(LaunchDataset::from_reader(FIXTURE_CSV.as_bytes()).unwrap());
        let state = AppState::new(dataset, ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, json) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["record_count"], 6);
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("site-dropdown"));
        assert!(html.contains("success-pie-chart"));
    }

    #[tokio::test]
    async fn test_dashboard_meta() {
        let (status, json) = get_json(create_test_app(), "/api/v1/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        // ALL sentinel first, then the three distinct sites
        let options = json["site_options"].as_array().unwrap();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0]["value"], "ALL");
        assert_eq!(json["payload_min"], 0.0);
        assert_eq!(json["payload_max"], 9600.0);
        assert_eq!(json["slider"]["max"], 10000.0);
        assert_eq!(json["slider"]["step"], 1000.0);
    }

    #[tokio::test]
    async fn test_pie_all_sites() {
        let (status, json) =
            get_json(create_test_app(), "/api/v1/charts/success-pie?site=ALL").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Total Success Launches By Site");

        let slices = json["slices"].as_array().unwrap();
        // Every site has at least one success in the fixture
        assert_eq!(slices.len(), 3);
        let total: u64 = slices.iter().map(|s| s["value"].as_u64().unwrap()).sum();
        assert_eq!(total, 4);
    }

    #[tokio::test]
    async fn test_pie_single_site() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/success-pie?site=CCAFS%20LC-40",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Total Success Launches for site CCAFS LC-40");

        let slices = json["slices"].as_array().unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0]["label"], "Success");
        assert_eq!(slices[0]["value"], 2);
        assert_eq!(slices[1]["label"], "Failure");
        assert_eq!(slices[1]["value"], 1);
    }

    #[tokio::test]
    async fn test_pie_defaults_to_all() {
        let (status, json) = get_json(create_test_app(), "/api/v1/charts/success-pie").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Total Success Launches By Site");
    }

    #[tokio::test]
    async fn test_pie_unknown_site_empty_chart() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/success-pie?site=Boca%20Chica",
        )
        .await;

        // Empty chart, not an error
        assert_eq!(status, StatusCode::OK);
        assert!(json["slices"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scatter_with_bounds() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/success-payload-scatter?site=ALL&low=400&high=5000",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let points = json["points"].as_array().unwrap();
        // 525, 4700, 500 fall inside (400, 5000)
        assert_eq!(points.len(), 3);
        assert!(points
            .iter()
            .all(|p| p["payload_mass_kg"].as_f64().unwrap() > 400.0));
    }

    #[tokio::test]
    async fn test_scatter_excludes_exact_bound() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/success-payload-scatter?site=VAFB%20SLC-4E&low=0&high=9600",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let points = json["points"].as_array().unwrap();
        // The 9600 kg record sits exactly on the high bound and is excluded;
        // the 500 kg record survives
        assert_eq!(points.len(), 1);
        assert_eq!(points[0]["payload_mass_kg"], 500.0);
        assert_eq!(points[0]["outcome_class"], 1);
        assert_eq!(points[0]["booster_version_category"], "v1.1");
    }

    #[tokio::test]
    async fn test_scatter_degenerate_range_empty() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/success-payload-scatter?site=ALL&low=5000&high=5000",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["points"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scatter_default_bounds() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/success-payload-scatter?site=ALL",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        // Default bounds (0, 10000): the 0 kg record sits on the low bound
        let points = json["points"].as_array().unwrap();
        assert_eq!(points.len(), 5);
    }

    #[tokio::test]
    async fn test_scatter_rejects_nan_bounds() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/charts/success-payload-scatter?site=ALL&low=NaN&high=5000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
