//! Market-context summary — the aggregate snapshot of the loaded dataset
//! that grounds the assistant's system prompt.

use crate::dataset::analytics::{market_analytics, ValueCount};
use crate::dataset::JobDataset;

/// Builds the aggregate summary the assistant sees before every reply.
/// Mirrors the analytics tab: totals, type and location counts, top roles.
pub fn market_context(dataset: &JobDataset) -> String {
    let analytics = market_analytics(dataset);
    format!(
        "Current Philippine Job Market Context:\n\
         - Total available jobs: {}\n\
         - Job types: {}\n\
         - Locations: {}\n\
         - Popular roles: {}",
        analytics.total_jobs,
        join_counts(&analytics.by_employment_type),
        join_counts(&analytics.by_location),
        join_counts(&analytics.top_titles),
    )
}

fn join_counts(counts: &[ValueCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{} ({})", c.value, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}
