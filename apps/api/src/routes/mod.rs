pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::notes::handlers as notes;
use crate::outreach::handlers as outreach;
use crate::settings::handlers as settings;
use crate::state::AppState;
use crate::summarizer::handlers as summarizer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route("/api/v1/jobs/extract", post(extraction::handle_extract))
        .route("/api/v1/jobs/current", get(extraction::handle_current_job))
        .route("/api/v1/jobs/clipboard", post(outreach::handle_clipboard))
        .route("/api/v1/jobs/summary", post(summarizer::handle_summary))
        .route("/api/v1/jobs/match", post(summarizer::handle_match))
        // Outreach
        .route("/api/v1/outreach/generate", post(outreach::handle_generate))
        .route(
            "/api/v1/outreach/current",
            get(outreach::handle_current_outreach),
        )
        .route("/api/v1/outreach/draft", post(outreach::handle_draft))
        .route(
            "/api/v1/outreach/email-link",
            post(outreach::handle_email_link),
        )
        // Notes
        .route("/api/v1/notes", post(notes::handle_save_note))
        // Settings
        .route(
            "/api/v1/settings",
            get(settings::handle_get_settings)
                .put(settings::handle_save_settings)
                .delete(settings::handle_reset_settings),
        )
        .route(
            "/api/v1/recent-jobs",
            get(settings::handle_recent_jobs).delete(settings::handle_clear_recent_jobs),
        )
        .with_state(state)
}
