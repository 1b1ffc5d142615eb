//! Job Recommender — picks up to three listings from a pool and scores them by position.

use serde::{Deserialize, Serialize};

use crate::guidance::knowledge_base::JobListing;
use crate::guidance::taxonomy::ExperienceLevel;

pub const MAX_RECOMMENDATIONS: usize = 3;
pub const BASE_MATCH_SCORE: u32 = 85;
pub const MATCH_SCORE_STEP: u32 = 5;

const REFERENCE_SKILLS: [&str; 5] = [
    "Python",
    "JavaScript",
    "SQL",
    "Problem Solving",
    "Communication",
];

const DEFAULT_LOCATION: &str = "Remote/Hybrid (India)";
const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,
    pub match_score: u32,
    pub required_skills: Vec<String>,
    pub description: String,
    pub apply_link: String,
    pub linkedin_link: String,
}

/// Salary band quoted for a listing at the caller's experience level,
/// with the fallback used when the listing has no such band.
pub fn salary_range(job: &JobListing, level: ExperienceLevel) -> String {
    let (band, fallback) = match level {
        ExperienceLevel::Student => (&job.salary_fresher, "4-6 LPA"),
        ExperienceLevel::Fresher | ExperienceLevel::EntryLevel => {
            (&job.salary_intermediate, "8-12 LPA")
        }
        ExperienceLevel::MidLevel | ExperienceLevel::Intermediate => {
            (&job.salary_senior, "15-25 LPA")
        }
        _ => (&job.salary_senior, "20-35 LPA"),
    };
    band.clone().unwrap_or_else(|| fallback.to_string())
}

/// Recommends the first `MAX_RECOMMENDATIONS` jobs of `pool`.
/// The i-th recommendation scores `85 + 5·i` and lists `min(5, 3 + i)` reference skills.
pub fn recommend(pool: &[JobListing], level: ExperienceLevel) -> Vec<JobRecommendation> {
    pool.iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(i, job)| {
            let skill_count = (3 + i).min(REFERENCE_SKILLS.len());
            JobRecommendation {
                title: job.title.clone(),
                company: job.company.clone(),
                location: job
                    .location
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
                salary_range: salary_range(job, level),
                match_score: BASE_MATCH_SCORE + MATCH_SCORE_STEP * i as u32,
                required_skills: REFERENCE_SKILLS[..skill_count]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                description: format!(
                    "Exciting opportunity to work as a {} at {}. Competitive salary, great benefits, \
                     and excellent growth potential in India's tech ecosystem.",
                    job.title, job.company
                ),
                apply_link: job
                    .apply_link
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_LINK.to_string()),
                linkedin_link: job
                    .linkedin_link
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_LINK.to_string()),
            }
        })
        .collect()
}
