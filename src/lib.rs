//! # Launchboard
//!
//! Interactive launch-records dashboard. Loads a static CSV dataset of
//! historical rocket launches once at startup and serves two linked charts
//! over HTTP: a success pie chart and a payload/outcome scatter plot, both
//! driven by a launch-site dropdown and a payload-mass range slider.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loader and the immutable in-memory launch table
//! - [`analytics`]: Pure filter/aggregate functions behind both charts
//! - [`api`]: HTTP server and chart-data endpoints with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::analytics::success_counts;
//! use launchboard::dataset::{LaunchDataset, SiteSelection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the table once
//!     let dataset = LaunchDataset::load("data/spacex_launch_dash.csv")?;
//!
//!     // Successful launches per site
//!     for group in success_counts(&dataset, &SiteSelection::All) {
//!         println!("{}: {} successes", group.key, group.count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    DatasetError, DatasetResult, LaunchDataset, LaunchRecord, Outcome, PayloadRange, SiteSelection,
};

pub use analytics::{payload_outcome_rows, success_counts, GroupCount};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
