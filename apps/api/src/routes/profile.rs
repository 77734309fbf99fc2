use axum::Json;

use crate::analysis::handlers::validate_profile;
use crate::errors::AppError;
use crate::models::Profile;
use crate::profile_health::{profile_health, ProfileHealthReport};

/// POST /api/v1/profile/health
pub async fn handle_profile_health(
    Json(profile): Json<Profile>,
) -> Result<Json<ProfileHealthReport>, AppError> {
    validate_profile(&profile)?;
    Ok(Json(profile_health(&profile)))
}
