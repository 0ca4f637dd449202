//! Outreach generation: settings check, one model call, reply post-processing.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::job::JobRecord;
use crate::models::settings::Settings;
use crate::outreach::prompts::SYSTEM_PROMPT;
use crate::outreach::response::{parse_outreach, RenderedOutreach};
use crate::outreach::templating::build_prompt;
use crate::summarizer::{summarize_job, JobSummary};

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedOutreach {
    /// The model's reply, unmodified.
    pub message: String,
    pub rendered: RenderedOutreach,
    pub job_summary: JobSummary,
}

/// Generates outreach for `job`. Fails before any network call when no
/// OpenRouter key is configured; upstream failures are not retried.
pub async fn generate_outreach(
    llm: &LlmClient,
    settings: &Settings,
    job: &JobRecord,
) -> Result<GeneratedOutreach, AppError> {
    if settings.open_router_api_key.trim().is_empty() {
        return Err(AppError::ConfigurationMissing(
            "OpenRouter API key not configured".to_string(),
        ));
    }

    let prompt = build_prompt(job, &settings.user_resume, &settings.user_preferences);
    info!(
        "Generating {} outreach for {} at {}",
        settings.user_preferences.tone, job.title, job.company
    );

    let message = llm
        .complete(&settings.open_router_api_key, SYSTEM_PROMPT, &prompt)
        .await?;

    Ok(GeneratedOutreach {
        rendered: parse_outreach(&message),
        job_summary: summarize_job(job),
        message,
    })
}
