//! Axum route handlers for settings and recent jobs.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::RecentJob;
use crate::models::settings::Settings;
use crate::settings::recent_jobs::{clear_recent_jobs, load_recent_jobs, DEFAULT_RECENT_JOBS_SHOWN};
use crate::settings::save_settings;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecentJobsQuery {
    pub limit: Option<usize>,
}

/// GET /api/v1/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.read().await.clone())
}

/// PUT /api/v1/settings
///
/// Persists the full settings object, then reloads the in-memory snapshot from the store.
pub async fn handle_save_settings(
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> Result<Json<Settings>, AppError> {
    save_settings(state.store.as_ref(), &settings).await?;
    Ok(Json(state.reload_settings().await?))
}

/// DELETE /api/v1/settings
pub async fn handle_reset_settings(
    State(state): State<AppState>,
) -> Result<Json<Settings>, AppError> {
    save_settings(state.store.as_ref(), &Settings::default()).await?;
    info!("Settings reset to defaults");
    Ok(Json(state.reload_settings().await?))
}

/// GET /api/v1/recent-jobs?limit=
pub async fn handle_recent_jobs(
    State(state): State<AppState>,
    Query(query): Query<RecentJobsQuery>,
) -> Result<Json<Vec<RecentJob>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_JOBS_SHOWN);
    if limit == 0 {
        return Err(AppError::Validation("limit must be greater than zero".to_string()));
    }

    let mut jobs = load_recent_jobs(state.store.as_ref()).await?;
    jobs.truncate(limit);
    Ok(Json(jobs))
}

/// DELETE /api/v1/recent-jobs
pub async fn handle_clear_recent_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecentJob>>, AppError> {
    clear_recent_jobs(state.store.as_ref()).await?;
    info!("Recent jobs cleared");
    Ok(Json(Vec::new()))
}
