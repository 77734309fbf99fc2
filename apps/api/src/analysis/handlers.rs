//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advice::insights::CareerInsights;
use crate::analysis::AnalysisResult;
use crate::errors::AppError;
use crate::matching::jd_parser::{parse_job_text, ParsedJobText};
use crate::models::{JobPosting, Profile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub profile: Profile,
    pub job: JobPosting,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub profile: Profile,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<AnalysisResult>,
}

#[derive(Debug, Deserialize)]
pub struct ParseJobRequest {
    pub text: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub seniority_level: String,
}

#[derive(Debug, Serialize)]
pub struct ParseJobResponse {
    pub parsed: ParsedJobText,
    /// Ready to send to /analyze once title and company are filled in.
    pub job: JobPosting,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

pub fn validate_profile(profile: &Profile) -> Result<(), AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("profile.name cannot be empty".to_string()));
    }
    Ok(())
}

pub fn validate_job(job: &JobPosting) -> Result<(), AppError> {
    if job.title.trim().is_empty() {
        return Err(AppError::Validation("job.title cannot be empty".to_string()));
    }
    if job.company.trim().is_empty() {
        return Err(AppError::Validation("job.company cannot be empty".to_string()));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores one profile against one job and returns the full advice set.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    validate_profile(&request.profile)?;
    validate_job(&request.job)?;

    let result = state.analyzer.analyze(&request.profile, &request.job).await;
    info!(
        "Analyzed {} at {}: {} ({})",
        result.job_title, result.company, result.match_score.percentage, result.match_score.rating
    );

    Ok(Json(result))
}

/// POST /api/v1/analyze/batch
///
/// Analyzes every job against the same profile, best match first.
pub async fn handle_analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>, AppError> {
    validate_profile(&request.profile)?;
    if request.jobs.is_empty() {
        return Err(AppError::Validation("jobs cannot be empty".to_string()));
    }
    for job in &request.jobs {
        validate_job(job)?;
    }

    let results = state
        .analyzer
        .analyze_many(&request.profile, &request.jobs)
        .await;
    info!("Batch analyzed {} jobs for {}", results.len(), request.profile.name);

    Ok(Json(BatchAnalyzeResponse { results }))
}

/// POST /api/v1/insights
///
/// Cover-letter opening, fit narrative, learning roadmap and salary tips.
pub async fn handle_insights(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CareerInsights>, AppError> {
    validate_profile(&request.profile)?;
    validate_job(&request.job)?;

    Ok(Json(
        state.analyzer.insights(&request.profile, &request.job).await,
    ))
}

/// POST /api/v1/jobs/parse
///
/// Extracts a skill list and experience-years estimate from raw job text,
/// and returns a posting built from them.
pub async fn handle_parse_job(
    Json(request): Json<ParseJobRequest>,
) -> Result<Json<ParseJobResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let parsed = parse_job_text(&request.text);
    let job = JobPosting::from_description(
        &request.title,
        &request.company,
        &request.seniority_level,
        &request.text,
    );

    Ok(Json(ParseJobResponse { parsed, job }))
}
