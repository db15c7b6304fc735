//! Dataset ingestion and the in-memory snapshot the rest of the API reads.
//!
//! A load replaces the whole snapshot atomically; handlers clone the `Arc`
//! out of the state lock, so searches in flight keep the records they
//! started with.

pub mod analytics;
pub mod handlers;
pub mod loader;

use chrono::{DateTime, Utc};

use crate::models::job::JobRecord;

/// An immutable snapshot of the loaded job dataset.
#[derive(Debug, Clone)]
pub struct JobDataset {
    records: Vec<JobRecord>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl JobDataset {
    pub fn new(records: Vec<JobRecord>, source: impl Into<String>) -> Self {
        Self {
            records,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Where the snapshot came from: a file path or an uploaded file name.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct employment types in first-seen order, for filter dropdowns.
    pub fn distinct_employment_types(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.employment_type.as_str()))
    }

    /// Distinct locations in first-seen order, for filter dropdowns.
    pub fn distinct_locations(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.location.as_str()))
    }

    /// Records matching the optional exact-match filters, in dataset order.
    /// `None` means no filter on that column.
    pub fn filtered(
        &self,
        employment_type: Option<&str>,
        location: Option<&str>,
    ) -> Vec<&JobRecord> {
        self.records
            .iter()
            .filter(|r| employment_type.is_none_or(|et| r.employment_type == et))
            .filter(|r| location.is_none_or(|loc| r.location == loc))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, location: &str, employment_type: &str) -> JobRecord {
        JobRecord {
            job_title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            employment_type: employment_type.to_string(),
            salary_range: String::new(),
            posted_date: String::new(),
        }
    }

    fn dataset() -> JobDataset {
        JobDataset::new(
            vec![
                job("Data Analyst", "Cebu", "Full-time"),
                job("Data Entry Clerk", "Manila", "Part-time"),
                job("Nurse", "Cebu", "Full-time"),
            ],
            "test.csv",
        )
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        let ds = dataset();
        let all = ds.filtered(None, None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].job_title, "Data Analyst");
        assert_eq!(all[2].job_title, "Nurse");
    }

    #[test]
    fn test_filters_are_exact_match_and_compose() {
        let ds = dataset();
        assert_eq!(ds.filtered(Some("Full-time"), None).len(), 2);
        assert_eq!(ds.filtered(None, Some("Manila")).len(), 1);
        assert_eq!(ds.filtered(Some("Full-time"), Some("Cebu")).len(), 2);
        assert_eq!(ds.filtered(Some("Part-time"), Some("Cebu")).len(), 0);
        // Exact match only — no partial matching.
        assert_eq!(ds.filtered(Some("Full"), None).len(), 0);
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let ds = dataset();
        assert_eq!(ds.distinct_employment_types(), vec!["Full-time", "Part-time"]);
        assert_eq!(ds.distinct_locations(), vec!["Cebu", "Manila"]);
    }
}
