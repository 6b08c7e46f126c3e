//! Core data types for the launch dataset
//!
//! This module defines the fundamental types used throughout the crate:
//! - `LaunchRecord`: One historical launch entry
//! - `Outcome`: Binary success/failure classification
//! - `SiteSelection`: A dropdown value (all sites, or one site)
//! - `PayloadRange`: A slider value (payload-mass bounds)

use serde::{Deserialize, Serialize};

/// Sentinel dropdown value meaning "all launch sites"
pub const ALL_SITES: &str = "ALL";

/// One historical launch entry
///
/// Immutable once loaded; the full collection lives for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Sequential flight number from the source dataset
    pub flight_number: u32,
    /// Launch site name, e.g. "CCAFS LC-40"
    pub launch_site: String,
    /// Payload mass in kilograms (>= 0)
    pub payload_mass_kg: f64,
    /// Launch outcome (success/failure)
    pub outcome: Outcome,
    /// Full booster version string, e.g. "F9 v1.1 B1011"
    pub booster_version: String,
    /// Booster version family, e.g. "v1.1", "FT", "B4", "B5"
    pub booster_version_category: String,
}

/// Binary launch outcome
///
/// Stored in the source CSV as the `class` column: 1 = success, 0 = failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Parse from the CSV `class` column
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Numeric class value (1 = success, 0 = failure), as charted on the
    /// scatter y-axis
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    /// Human-readable group label for the per-site pie chart
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A site-dropdown value: either the `ALL` sentinel or one concrete site name
///
/// Transient per UI interaction; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// All launch sites (wire value `"ALL"`)
    All,
    /// One specific launch site by name
    Site(String),
}

impl SiteSelection {
    /// Parse the wire value coming from the dropdown
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record matches this selection
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", ALL_SITES),
            SiteSelection::Site(site) => write!(f, "{}", site),
        }
    }
}

/// A payload-mass window selected on the range slider
///
/// Containment is strict on both bounds: a record exactly at `low` or `high`
/// is excluded. With `low >= high` the range is empty.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Strict-exclusive containment check
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg > self.low && payload_mass_kg < self.high
    }

    /// True when no payload mass can satisfy the range
    pub fn is_empty(&self) -> bool {
        self.low >= self.high
    }
}
