//! Aggregate counts over the loaded dataset — the numbers behind the
//! analytics charts and the assistant's market-context summary.

use std::collections::HashMap;

use serde::Serialize;

use super::JobDataset;

/// How many titles `top_titles` keeps.
const TOP_TITLES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct MarketAnalytics {
    pub total_jobs: usize,
    pub by_employment_type: Vec<ValueCount>,
    pub by_location: Vec<ValueCount>,
    pub top_titles: Vec<ValueCount>,
}

/// Occurrence counts in descending order; equal counts keep first-seen order.
pub fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(ValueCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn market_analytics(dataset: &JobDataset) -> MarketAnalytics {
    let records = dataset.records();
    MarketAnalytics {
        total_jobs: records.len(),
        by_employment_type: value_counts(records.iter().map(|r| r.employment_type.as_str())),
        by_location: value_counts(records.iter().map(|r| r.location.as_str())),
        top_titles: value_counts(records.iter().map(|r| r.job_title.as_str()))
            .into_iter()
            .take(TOP_TITLES)
            .collect(),
    }
}
