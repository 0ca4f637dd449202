//! Axum route handlers for job extraction.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extractor::extract_from_html;
use crate::extraction::sites::detect_site;
use crate::extraction::watcher::{ExtractionWatcher, HttpPageSource};
use crate::models::job::JobRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    /// Rendered page HTML. When absent the page is fetched and polled on the fixed schedule.
    pub html: Option<String>,
}

/// POST /api/v1/jobs/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<JobRecord>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let job = match request.html {
        Some(html) => extract_from_html(&html, &request.url)?,
        None => {
            // Only allow-listed job pages are fetched.
            if detect_site(&request.url).is_none() {
                return Err(AppError::NoJobDetected);
            }
            let source = HttpPageSource::new(state.page_client.clone(), request.url.as_str());
            ExtractionWatcher::new(source).run().await?
        }
    };

    info!("Job detected: {} at {} ({})", job.title, job.company, job.source);
    *state.last_job.write().await = Some(job.clone());

    Ok(Json(job))
}

/// GET /api/v1/jobs/current
pub async fn handle_current_job(
    State(state): State<AppState>,
) -> Result<Json<JobRecord>, AppError> {
    state
        .last_job
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or(AppError::NoJobDetected)
}
