use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::job::JobRecord;
use crate::models::settings::Settings;
use crate::notes::NotesClient;
use crate::outreach::generator::GeneratedOutreach;
use crate::settings::load_settings;
use crate::storage::KvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
    pub llm: LlmClient,
    pub notes: NotesClient,
    /// Client used to fetch job pages; carries a browser user agent.
    pub page_client: reqwest::Client,
    /// Snapshot of the stored settings, replaced wholesale on save or reset.
    pub settings: Arc<RwLock<Settings>>,
    pub last_job: Arc<RwLock<Option<JobRecord>>>,
    pub last_outreach: Arc<RwLock<Option<GeneratedOutreach>>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KvStore>,
        llm: LlmClient,
        notes: NotesClient,
        page_client: reqwest::Client,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            llm,
            notes,
            page_client,
            settings: Arc::new(RwLock::new(settings)),
            last_job: Arc::new(RwLock::new(None)),
            last_outreach: Arc::new(RwLock::new(None)),
        }
    }

    /// The job supplied with the request, else the last extracted one.
    pub async fn resolve_job(&self, job: Option<JobRecord>) -> Result<JobRecord, AppError> {
        match job {
            Some(job) => Ok(job),
            None => self
                .last_job
                .read()
                .await
                .clone()
                .ok_or(AppError::NoJobDetected),
        }
    }

    /// Re-reads settings from the store into the in-memory snapshot.
    pub async fn reload_settings(&self) -> Result<Settings, AppError> {
        let settings = load_settings(self.store.as_ref()).await?;
        *self.settings.write().await = settings.clone();
        Ok(settings)
    }
}
