//! Axum route handlers for the Dataset API: loading, listings, analytics.

use std::path::Path;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::analytics::{market_analytics, MarketAnalytics};
use crate::dataset::{loader, JobDataset};
use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub source: String,
    pub total_jobs: usize,
    pub employment_types: Vec<String>,
    pub locations: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

impl DatasetSummary {
    fn of(dataset: &JobDataset) -> Self {
        Self {
            source: dataset.source().to_string(),
            total_jobs: dataset.len(),
            employment_types: dataset.distinct_employment_types(),
            locations: dataset.distinct_locations(),
            loaded_at: dataset.loaded_at(),
        }
    }
}

/// POST /api/v1/dataset/load
///
/// Loads (or reloads) the dataset from the configured CSV path.
pub async fn handle_load(
    State(state): State<AppState>,
) -> Result<Json<DatasetSummary>, AppError> {
    let path = state.config.dataset_path.clone();
    let records = loader::load_from_path(Path::new(&path))?;

    let snapshot = state.install_dataset(JobDataset::new(records, &path)).await;
    info!("Dataset loaded: {} jobs from {}", snapshot.len(), path);

    Ok(Json(DatasetSummary::of(&snapshot)))
}

/// POST /api/v1/dataset/upload
///
/// Accepts a CSV file in a multipart field named `file` and installs it as
/// the current dataset.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DatasetSummary>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.csv").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let records = loader::load_from_bytes(&data)?;
        let snapshot = state
            .install_dataset(JobDataset::new(records, &filename))
            .await;
        info!("Dataset uploaded: {} jobs from {}", snapshot.len(), filename);

        return Ok(Json(DatasetSummary::of(&snapshot)));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// GET /api/v1/dataset
pub async fn handle_dataset_summary(
    State(state): State<AppState>,
) -> Result<Json<DatasetSummary>, AppError> {
    let dataset = state
        .dataset_snapshot()
        .await
        .ok_or(AppError::DatasetNotLoaded)?;
    Ok(Json(DatasetSummary::of(&dataset)))
}

#[derive(Debug, Deserialize)]
pub struct ListingsQuery {
    pub employment_type: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub total: usize,
    pub jobs: Vec<JobRecord>,
}

/// GET /api/v1/jobs?employment_type=&location=
///
/// Filtered listings in dataset order. An absent parameter — or the
/// dashboard's literal "All" sentinel — means no filter on that column.
pub async fn handle_listings(
    State(state): State<AppState>,
    Query(params): Query<ListingsQuery>,
) -> Result<Json<ListingsResponse>, AppError> {
    let dataset = state
        .dataset_snapshot()
        .await
        .ok_or(AppError::DatasetNotLoaded)?;

    let employment_type = params.employment_type.as_deref().filter(|v| *v != "All");
    let location = params.location.as_deref().filter(|v| *v != "All");

    let jobs: Vec<JobRecord> = dataset
        .filtered(employment_type, location)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ListingsResponse {
        total: jobs.len(),
        jobs,
    }))
}

/// GET /api/v1/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
) -> Result<Json<MarketAnalytics>, AppError> {
    let dataset = state
        .dataset_snapshot()
        .await
        .ok_or(AppError::DatasetNotLoaded)?;
    Ok(Json(market_analytics(&dataset)))
}
