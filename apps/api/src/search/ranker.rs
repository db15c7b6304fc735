//! Ranking — scores every record against a query and returns the top matches.
//!
//! The scorer is pluggable behind `SimilarityScorer` so the endpoint and
//! handler code never name a concrete backend. `JaccardScorer` is the default
//! and only backend: pure, deterministic, no I/O.

use crate::models::job::{JobRecord, ScoredJob};
use crate::search::text::similarity;

/// Matches returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_K: usize = 10;

/// Scores a free-text query against one record's composite text.
/// Implementations must be pure: same inputs, same score, no side effects.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, query: &str, text: &str) -> f64;
}

/// Bag-of-words Jaccard scorer over normalized tokens.
pub struct JaccardScorer;

impl SimilarityScorer for JaccardScorer {
    fn score(&self, query: &str, text: &str) -> f64 {
        similarity(query, text)
    }
}

/// Scores every record against `query` and returns the best `top_k` matches.
///
/// Records sharing no token with the query are dropped entirely, even when
/// fewer than `top_k` records survive. Survivors are ordered by descending
/// score; equal scores keep their input order. The input slice is never
/// reordered or mutated.
pub fn search(
    scorer: &dyn SimilarityScorer,
    query: &str,
    records: &[JobRecord],
    top_k: usize,
) -> Vec<ScoredJob> {
    let mut hits: Vec<ScoredJob> = records
        .iter()
        .filter_map(|record| {
            let score = scorer.score(query, &record.composite_text());
            (score > 0.0).then(|| ScoredJob {
                job: record.clone(),
                similarity_score: score,
            })
        })
        .collect();

    // sort_by is stable, so ties keep original record order.
    hits.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
    hits.truncate(top_k);
    hits
}
