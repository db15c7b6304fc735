use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assistant::session::ChatSession;
use crate::config::Config;
use crate::dataset::JobDataset;
use crate::llm_client::LlmClient;
use crate::search::ranker::SimilarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Current dataset snapshot; `None` until the first successful load.
    /// A reload swaps the `Arc`, so scans in flight keep their records.
    pub dataset: Arc<RwLock<Option<Arc<JobDataset>>>>,
    /// Chat sessions, in-memory only; gone on restart.
    pub sessions: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable similarity scorer. Default: JaccardScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
}

impl AppState {
    /// Clones the current snapshot out of the lock so record scans never
    /// hold it.
    pub async fn dataset_snapshot(&self) -> Option<Arc<JobDataset>> {
        self.dataset.read().await.clone()
    }

    /// Installs a freshly loaded dataset as the current snapshot.
    pub async fn install_dataset(&self, dataset: JobDataset) -> Arc<JobDataset> {
        let dataset = Arc::new(dataset);
        *self.dataset.write().await = Some(Arc::clone(&dataset));
        dataset
    }
}
