//! Axum route handlers for summaries and skill matching.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::state::AppState;
use crate::summarizer::skills::calculate_job_match;
use crate::summarizer::{summarize_job, JobSummary};

#[derive(Debug, Default, Deserialize)]
pub struct SummaryRequest {
    pub job: Option<JobRecord>,
    /// Bare description text, summarized when no job is given.
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_skills: Vec<String>,
    pub user_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub score: u32,
}

/// POST /api/v1/jobs/summary
///
/// Summarizes the given job, a bare description, or the last extracted job.
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<JobSummary>, AppError> {
    let job = match (request.job, request.description) {
        (None, Some(description)) => JobRecord {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            description,
            url: String::new(),
            source: String::new(),
        },
        (job, _) => state.resolve_job(job).await?,
    };
    Ok(Json(summarize_job(&job)))
}

/// POST /api/v1/jobs/match
pub async fn handle_match(Json(request): Json<MatchRequest>) -> Json<MatchResponse> {
    Json(MatchResponse {
        score: calculate_job_match(&request.job_skills, &request.user_skills),
    })
}
