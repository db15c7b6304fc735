//! Axum route handlers for the Search API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::search::ranker::{search, DEFAULT_TOP_K};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Defaults to `DEFAULT_TOP_K` when absent.
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub job: JobRecord,
    pub similarity_score: f64,
    /// The score as a percentage with one decimal place, e.g. `"80.0%"`.
    pub match_percent: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_matches: usize,
    pub results: Vec<SearchHit>,
}

/// POST /api/v1/jobs/search
///
/// Ranks the loaded dataset against a free-text query. An empty query is not
/// an error — it simply matches nothing.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let dataset = state
        .dataset_snapshot()
        .await
        .ok_or(AppError::DatasetNotLoaded)?;

    let top_k = request.top_k.unwrap_or(DEFAULT_TOP_K);
    let hits = search(state.scorer.as_ref(), &request.query, dataset.records(), top_k);

    let results: Vec<SearchHit> = hits
        .into_iter()
        .map(|scored| SearchHit {
            match_percent: scored.match_percent(),
            similarity_score: scored.similarity_score,
            job: scored.job,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: request.query,
        total_matches: results.len(),
        results,
    }))
}
