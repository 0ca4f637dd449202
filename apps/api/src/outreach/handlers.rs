//! Axum route handlers for outreach generation and the copy/send helpers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::outreach::generator::{generate_outreach, GeneratedOutreach};
use crate::outreach::mailto::{job_clipboard_json, mailto_link};
use crate::outreach::templating::{draft_locally, LocalDraft};
use crate::settings::recent_jobs::save_recent_job;
use crate::state::AppState;

/// Body shared by every endpoint that acts on one job.
#[derive(Debug, Default, Deserialize)]
pub struct JobRequest {
    pub job: Option<JobRecord>,
}

#[derive(Debug, Serialize)]
pub struct MailtoResponse {
    pub mailto: String,
}

#[derive(Debug, Serialize)]
pub struct ClipboardResponse {
    pub text: String,
}

/// POST /api/v1/outreach/generate
///
/// Calls the model once, caches the result as the current outreach and
/// records the job in recent jobs.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<JobRequest>,
) -> Result<Json<GeneratedOutreach>, AppError> {
    let job = state.resolve_job(request.job).await?;
    let settings = state.settings.read().await.clone();

    let generated = generate_outreach(&state.llm, &settings, &job).await?;
    *state.last_outreach.write().await = Some(generated.clone());

    // Best effort: the generated message is returned either way.
    if let Err(e) = save_recent_job(state.store.as_ref(), job).await {
        warn!("Failed to record recent job: {e}");
    }

    Ok(Json(generated))
}

/// GET /api/v1/outreach/current
pub async fn handle_current_outreach(
    State(state): State<AppState>,
) -> Result<Json<GeneratedOutreach>, AppError> {
    state
        .last_outreach
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No outreach generated yet".to_string()))
}

/// POST /api/v1/outreach/draft
pub async fn handle_draft(
    State(state): State<AppState>,
    Json(request): Json<JobRequest>,
) -> Result<Json<LocalDraft>, AppError> {
    let job = state.resolve_job(request.job).await?;
    let settings = state.settings.read().await;
    Ok(Json(draft_locally(
        &job,
        &settings.user_resume,
        &settings.user_preferences,
    )))
}

/// POST /api/v1/outreach/email-link
pub async fn handle_email_link(
    State(state): State<AppState>,
    Json(request): Json<JobRequest>,
) -> Result<Json<MailtoResponse>, AppError> {
    let job = state.resolve_job(request.job).await?;
    Ok(Json(MailtoResponse {
        mailto: mailto_link(&job),
    }))
}

/// POST /api/v1/jobs/clipboard
pub async fn handle_clipboard(
    State(state): State<AppState>,
    Json(request): Json<JobRequest>,
) -> Result<Json<ClipboardResponse>, AppError> {
    let job = state.resolve_job(request.job).await?;
    Ok(Json(ClipboardResponse {
        text: job_clipboard_json(&job)?,
    }))
}
