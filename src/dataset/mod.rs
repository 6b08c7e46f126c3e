//! Launch Dataset
//!
//! Loads the static launch-records CSV into an immutable in-memory table:
//!
//! - **types**: Core data structures (LaunchRecord, Outcome, SiteSelection, PayloadRange)
//! - **loader**: CSV parsing and load-time derivations (payload bounds, distinct sites)
//! - **error**: Error types
//!
//! The dataset is loaded exactly once at process start and never mutated
//! afterwards; every chart request reads from the same table.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchboard::dataset::{LaunchDataset, SiteSelection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = LaunchDataset::load("data/spacex_launch_dash.csv")?;
//!
//!     println!(
//!         "{} launches across {} sites, payload {} - {} kg",
//!         dataset.len(),
//!         dataset.sites().len(),
//!         dataset.min_payload(),
//!         dataset.max_payload()
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use error::{DatasetError, DatasetResult};
pub use loader::LaunchDataset;
pub use types::{LaunchRecord, Outcome, PayloadRange, SiteSelection};
