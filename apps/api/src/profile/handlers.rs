use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::envelope::ApiResponse;
use crate::models::profile::{ProfileRecord, UserProfile};
use crate::profile::validation::validate_profile;
use crate::state::AppState;
use crate::storage::StoredReport;

#[derive(Debug, Serialize)]
pub struct ProfilePayload {
    pub profile: Option<ProfileRecord>,
}

/// GET /api/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<ProfilePayload>>, AppError> {
    let profile = state.store.get_profile(user.id()).await?;
    Ok(Json(ApiResponse::ok(ProfilePayload { profile })))
}

/// POST /api/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UserProfile>,
) -> Result<Json<ApiResponse<ProfilePayload>>, AppError> {
    validate_profile(&req)?;
    let record = state.store.save_profile(user.id(), &req).await?;
    info!(user_id = user.id(), profile_id = %record.id, "Profile saved");

    Ok(Json(
        ApiResponse::ok(ProfilePayload {
            profile: Some(record),
        })
        .with_message("Profile saved successfully"),
    ))
}

/// POST /api/profile/submit
///
/// Saves the profile, then computes and stores its guidance report. A failure
/// to store the report is logged and does not fail the submission; the
/// dashboard recomputes when no current report exists.
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UserProfile>,
) -> Result<Json<ApiResponse<ProfilePayload>>, AppError> {
    validate_profile(&req)?;
    let record = state.store.save_profile(user.id(), &req).await?;

    let bundle = state.engine.recommend(&record.profile);
    let report = StoredReport::for_profile(&record, bundle);
    match state.store.save_report(user.id(), &report).await {
        Ok(()) => info!(
            user_id = user.id(),
            career_path = %report.bundle.career_recommendations.career_path,
            "Guidance report stored"
        ),
        Err(e) => warn!(user_id = user.id(), "Failed to store guidance report: {e}"),
    }

    Ok(Json(
        ApiResponse::ok(ProfilePayload {
            profile: Some(record),
        })
        .with_message("Profile submitted successfully"),
    ))
}
