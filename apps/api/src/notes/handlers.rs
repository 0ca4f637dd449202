//! Axum route handler for saving a job and its outreach message to notes.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SaveNoteRequest {
    pub job: Option<JobRecord>,
    /// Defaults to the last generated outreach message.
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveNoteResponse {
    pub saved: bool,
    pub page_id: Option<String>,
}

/// POST /api/v1/notes
pub async fn handle_save_note(
    State(state): State<AppState>,
    Json(request): Json<SaveNoteRequest>,
) -> Result<Json<SaveNoteResponse>, AppError> {
    let (api_key, database_id) = {
        let settings = state.settings.read().await;
        (
            settings.notion_api_key.clone(),
            settings.notion_database_id.clone(),
        )
    };
    if api_key.trim().is_empty() || database_id.trim().is_empty() {
        return Err(AppError::ConfigurationMissing(
            "Notion API key or database ID not configured".to_string(),
        ));
    }

    let job = state.resolve_job(request.job).await?;
    let message = match request.message.filter(|m| !m.trim().is_empty()) {
        Some(message) => message,
        None => state
            .last_outreach
            .read()
            .await
            .as_ref()
            .map(|generated| generated.message.clone())
            .ok_or_else(|| AppError::Validation("No content to save".to_string()))?,
    };

    let page_id = state
        .notes
        .create_page(&api_key, &database_id, &job, &message)
        .await?;

    Ok(Json(SaveNoteResponse {
        saved: true,
        page_id,
    }))
}
