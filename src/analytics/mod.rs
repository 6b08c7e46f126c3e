//! Selection Filter/Aggregator
//!
//! The pure functions behind both charts. Each UI interaction maps the
//! current control values `(SiteSelection, PayloadRange)` through one of
//! these against the immutable [`LaunchDataset`]; there is no state carried
//! between calls.
//!
//! Invalid selections (a site name not in the dataset, or an inverted range)
//! produce an empty result rather than an error: the dashboard controls only
//! emit valid values, and an empty chart is the correct rendering for an
//! empty selection.

use serde::Serialize;

use crate::dataset::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};

/// One pie-chart group: a label and how many records fell into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

impl GroupCount {
    fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Grouped counts for the success pie chart
///
/// - `All`: one group per launch site, counting only successful launches.
///   Sites with zero successes are omitted (a zero-valued pie slice would
///   not render anyway).
/// - `Site(s)`: records at site `s` grouped by outcome label, every matching
///   record counted regardless of outcome.
///
/// Group order follows the sorted site list (for `All`) or Success-then-Failure
/// (per site); the pie chart itself is unordered.
pub fn success_counts(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<GroupCount> {
    match selection {
        SiteSelection::All => dataset
            .sites()
            .iter()
            .filter_map(|site| {
                let successes = dataset
                    .records()
                    .iter()
                    .filter(|r| r.launch_site == *site && r.outcome.is_success())
                    .count();
                (successes > 0).then(|| GroupCount::new(site.clone(), successes))
            })
            .collect(),

        SiteSelection::Site(site) => {
            if !dataset.has_site(site) {
                return Vec::new();
            }

            let (successes, failures) = dataset
                .records()
                .iter()
                .filter(|r| r.launch_site == *site)
                .fold((0usize, 0usize), |(s, f), r| {
                    if r.outcome.is_success() {
                        (s + 1, f)
                    } else {
                        (s, f + 1)
                    }
                });

            let mut groups = Vec::with_capacity(2);
            if successes > 0 {
                groups.push(GroupCount::new("Success", successes));
            }
            if failures > 0 {
                groups.push(GroupCount::new("Failure", failures));
            }
            groups
        }
    }
}

/// Filtered rows for the payload/outcome scatter chart
///
/// Applies the site filter, then keeps only records with payload mass
/// strictly inside `(range.low, range.high)`. Records exactly at either
/// bound are excluded; an inverted or degenerate range yields no rows.
pub fn payload_outcome_rows<'a>(
    dataset: &'a LaunchDataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    if range.is_empty() {
        return Vec::new();
    }
    if let SiteSelection::Site(site) = selection {
        if !dataset.has_site(site) {
            return Vec::new();
        }
    }

    dataset
        .records()
        .iter()
        .filter(|r| selection.matches(r) && range.contains(r.payload_mass_kg))
        .collect()
}
