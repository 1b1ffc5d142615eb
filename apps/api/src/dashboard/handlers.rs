//! Dashboard and preview endpoints — guidance as the caller sees it.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::guidance::career::CareerRecommendation;
use crate::guidance::engine::GuidanceBundle;
use crate::guidance::jobs::JobRecommendation;
use crate::guidance::resume::ResumeGuidance;
use crate::guidance::skill_gap::{self, SkillDetail, SkillGapAnalysis};
use crate::models::envelope::ApiResponse;
use crate::models::profile::{ProfileRecord, UserProfile};
use crate::profile::validation::validate_profile;
use crate::state::AppState;

/// Every guidance field is `None` when the caller has no profile.
#[derive(Debug, Default, Serialize)]
pub struct DashboardData {
    pub has_profile: bool,
    pub user_profile: Option<ProfileRecord>,
    pub career_recommendations: Option<CareerRecommendation>,
    pub skill_gap_analysis: Option<SkillGapAnalysis>,
    pub job_recommendations: Option<Vec<JobRecommendation>>,
    pub resume_guidance: Option<ResumeGuidance>,
}

impl DashboardData {
    fn with_guidance(profile: ProfileRecord, bundle: GuidanceBundle) -> Self {
        Self {
            has_profile: true,
            user_profile: Some(profile),
            career_recommendations: Some(bundle.career_recommendations),
            skill_gap_analysis: Some(bundle.skill_gap_analysis),
            job_recommendations: Some(bundle.job_recommendations),
            resume_guidance: Some(bundle.resume_guidance),
        }
    }
}

/// GET /api/dashboard
pub async fn handle_get_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<DashboardData>>, AppError> {
    let Some(profile) = state.store.get_profile(user.id()).await? else {
        return Ok(Json(ApiResponse::ok(DashboardData::default())));
    };

    // A stored report is reused only if it was computed from this profile
    // version. Read failures fall back to recomputing.
    let stored = match state.store.get_report(user.id()).await {
        Ok(report) => report.filter(|r| r.is_current_for(&profile)),
        Err(e) => {
            warn!(user_id = user.id(), "Failed to read stored guidance: {e}");
            None
        }
    };

    let bundle = match stored {
        Some(report) => {
            debug!(user_id = user.id(), "Serving stored guidance report");
            report.bundle
        }
        None => {
            debug!(user_id = user.id(), "Computing guidance for dashboard");
            state.engine.recommend(&profile.profile)
        }
    };

    Ok(Json(ApiResponse::ok(DashboardData::with_guidance(
        profile, bundle,
    ))))
}

/// POST /api/guidance/preview
///
/// Runs the engine over the posted profile. Nothing is stored.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<UserProfile>,
) -> Result<Json<ApiResponse<GuidanceBundle>>, AppError> {
    validate_profile(&req)?;
    Ok(Json(ApiResponse::ok(state.engine.recommend(&req))))
}

/// GET /api/skills/:skill
///
/// Category, tier, learning resources and topics for one skill. Skills without
/// curated resources get search-link fallbacks.
pub async fn handle_get_skill(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<ApiResponse<SkillDetail>>, AppError> {
    let skill = skill.trim();
    if skill.is_empty() {
        return Err(AppError::Validation("skill must not be empty".to_string()));
    }
    Ok(Json(ApiResponse::ok(skill_gap::describe(
        skill,
        state.engine.knowledge_base(),
    ))))
}
