//! API Route Handlers
//!
//! Handlers are grouped by concern:
//! - **dashboard**: the embedded page and its control metadata
//! - **charts**: the pie and scatter chart data endpoints
//! - **health**: liveness/readiness probes

pub mod charts;
pub mod dashboard;
pub mod health;
