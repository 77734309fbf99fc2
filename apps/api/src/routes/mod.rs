pub mod applications;
pub mod health;
pub mod interview;
pub mod profile;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/batch", post(handlers::handle_analyze_batch))
        .route("/api/v1/insights", post(handlers::handle_insights))
        .route("/api/v1/jobs/parse", post(handlers::handle_parse_job))
        // Candidate tooling
        .route(
            "/api/v1/profile/health",
            post(profile::handle_profile_health),
        )
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_interview_questions),
        )
        .route(
            "/api/v1/applications",
            post(applications::handle_log_application),
        )
        .route(
            "/api/v1/applications/pattern",
            get(applications::handle_success_pattern),
        )
        .fallback(not_found)
        .with_state(state)
}
