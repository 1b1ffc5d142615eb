use crate::errors::AppError;
use crate::models::profile::UserProfile;

pub const MAX_CAREER_GOALS_CHARS: usize = 2000;

/// Checks a submitted profile before it is stored or scored.
///
/// Rejects:
/// - a blank `experience_level`
/// - any blank entry in the technical, soft or certification lists
/// - `career_goals` longer than `MAX_CAREER_GOALS_CHARS`
///
/// Blank goals pass; they resolve to the default track.
pub fn validate_profile(profile: &UserProfile) -> Result<(), AppError> {
    if profile.experience_level.trim().is_empty() {
        return Err(AppError::Validation(
            "experience_level must not be empty".to_string(),
        ));
    }

    let goals_len = profile.career_goals.chars().count();
    if goals_len > MAX_CAREER_GOALS_CHARS {
        return Err(AppError::Validation(format!(
            "career_goals is {goals_len} characters; the limit is {MAX_CAREER_GOALS_CHARS}"
        )));
    }

    let skills = &profile.current_skills;
    for (list, entries) in [
        ("technical", &skills.technical),
        ("soft", &skills.soft),
        ("certifications", &skills.certifications),
    ] {
        if entries.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "current_skills.{list} must not contain blank entries"
            )));
        }
    }

    Ok(())
}
