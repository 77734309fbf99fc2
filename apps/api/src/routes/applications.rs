use anyhow::anyhow;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tracker::{ApplicationRecord, SuccessPattern};

#[derive(Debug, Deserialize)]
pub struct LogApplicationRequest {
    pub job_title: String,
    pub company: String,
    pub match_score: f64,
    pub applied: bool,
}

/// POST /api/v1/applications
pub async fn handle_log_application(
    State(state): State<AppState>,
    Json(request): Json<LogApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationRecord>), AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    if !(0.0..=100.0).contains(&request.match_score) {
        return Err(AppError::Validation(
            "match_score must be between 0 and 100".to_string(),
        ));
    }

    let record = state
        .tracker
        .lock()
        .map_err(|_| AppError::Internal(anyhow!("application tracker lock poisoned")))?
        .log_application(
            &request.job_title,
            &request.company,
            request.match_score,
            request.applied,
        );
    info!("Logged application {} ({})", record.id, record.job_title);

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/applications/pattern
pub async fn handle_success_pattern(
    State(state): State<AppState>,
) -> Result<Json<SuccessPattern>, AppError> {
    let pattern = state
        .tracker
        .lock()
        .map_err(|_| AppError::Internal(anyhow!("application tracker lock poisoned")))?
        .success_pattern();
    Ok(Json(pattern))
}
