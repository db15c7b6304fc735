use serde::{Deserialize, Serialize};

/// One job posting, read verbatim from the dataset CSV and never mutated.
/// Serde names map to the exact, case-sensitive column headers of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "JobTitle", default)]
    pub job_title: String,
    #[serde(rename = "Company", default)]
    pub company: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "EmploymentType", default)]
    pub employment_type: String,
    #[serde(rename = "SalaryRange", default)]
    pub salary_range: String,
    #[serde(rename = "PostedDate", default)]
    pub posted_date: String,
}

impl JobRecord {
    /// The text one record is searched by: title, company, location, and
    /// employment type joined by single spaces, in that order. Salary and
    /// posting date are display-only and excluded.
    pub fn composite_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.job_title, self.company, self.location, self.employment_type
        )
    }
}

/// A job record annotated with its similarity score against one query.
/// Produced only by the ranker; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobRecord,
    /// Jaccard index of query tokens vs composite-text tokens, in (0, 1].
    pub similarity_score: f64,
}

impl ScoredJob {
    /// The score as a percentage with one decimal place, e.g. `"80.0%"`.
    pub fn match_percent(&self) -> String {
        format!("{:.1}%", self.similarity_score * 100.0)
    }
}
