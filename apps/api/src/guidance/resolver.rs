//! Career Path Resolver — classifies free-text career goals by ordered keyword rules.
//!
//! Every keyword chain is a table of `KeywordRule`s evaluated by `first_match`.
//! Order is significant: goal text often matches several rules ("data scientist"
//! also contains "data") and the first rule in table order wins.

use serde::{Deserialize, Serialize};

use crate::guidance::taxonomy::{
    CareerPath, CareerTrack, CertificationLevel, ExperienceLevel, KeywordSet,
};

/// Fires when the normalized goal text contains any of `keywords`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

pub const fn rule<T>(keywords: &'static [&'static str], outcome: T) -> KeywordRule<T> {
    KeywordRule { keywords, outcome }
}

/// Career track chain. Unmatched text resolves to `TechnologyProfessional`.
pub const CAREER_TRACK_RULES: &[KeywordRule<CareerTrack>] = &[
    rule(&["software", "developer", "engineer"], CareerTrack::SoftwareEngineering),
    rule(&["full stack", "mern"], CareerTrack::FullStackDevelopment),
    rule(&["data scientist", "machine learning"], CareerTrack::DataScience),
    rule(&["devops", "sre"], CareerTrack::DevOps),
    rule(&["cybersecurity", "security"], CareerTrack::Cybersecurity),
    rule(&["data", "analyst"], CareerTrack::DataAnalytics),
];

/// Job-pool chain used in legacy resolution. Checks the specific stacks before
/// the generic "software"/"developer" words. Unmatched text falls back to the
/// student software-engineering pool.
pub const JOB_POOL_RULES: &[KeywordRule<CareerPath>] = &[
    rule(&["full stack", "mern"], CareerPath::FullStackDeveloper),
    rule(&["data scientist", "machine learning"], CareerPath::DataScientist),
    rule(&["devops", "sre"], CareerPath::DevopsEngineer),
    rule(&["cybersecurity", "security"], CareerPath::CybersecurityAnalyst),
    rule(&["software", "developer"], CareerPath::SoftwareEngineer),
    rule(&["data", "analyst"], CareerPath::DataAnalyst),
];

/// Resume keyword chain. Unmatched text gets the general soft-skill list.
pub const RESUME_KEYWORD_RULES: &[KeywordRule<KeywordSet>] = &[
    rule(&["software"], KeywordSet::Software),
    rule(&["data"], KeywordSet::Data),
];

/// Lower-cases and trims goal text before matching.
pub fn normalize_goals(career_goals: &str) -> String {
    career_goals.trim().to_lowercase()
}

/// Returns the outcome of the first rule whose keywords appear in `normalized`.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], normalized: &str) -> Option<T> {
    rules
        .iter()
        .find(|r| r.keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|r| r.outcome)
}

/// Result of the primary resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub career_path: CareerPath,
    pub track: CareerTrack,
    pub certification_level: CertificationLevel,
}

/// Maps goal text and experience level to a career path and certification level.
pub fn resolve(career_goals: &str, experience_level: ExperienceLevel) -> Resolution {
    let track = first_match(CAREER_TRACK_RULES, &normalize_goals(career_goals))
        .unwrap_or(CareerTrack::TechnologyProfessional);
    Resolution {
        career_path: track.certification_path(),
        track,
        certification_level: CertificationLevel::for_experience(experience_level),
    }
}

/// Every classification of one profile's goal text, computed once per request
/// and handed to each generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalSignals {
    pub experience_level: ExperienceLevel,
    pub resolution: Resolution,
    /// `None` means no job-pool rule fired.
    pub legacy_job_path: Option<CareerPath>,
    pub keyword_set: KeywordSet,
}

impl GoalSignals {
    pub fn classify(career_goals: &str, experience_tag: &str) -> Self {
        let experience_level = ExperienceLevel::from_tag(experience_tag);
        let normalized = normalize_goals(career_goals);
        Self {
            experience_level,
            resolution: resolve(&normalized, experience_level),
            legacy_job_path: first_match(JOB_POOL_RULES, &normalized),
            keyword_set: first_match(RESUME_KEYWORD_RULES, &normalized)
                .unwrap_or(KeywordSet::General),
        }
    }
}
