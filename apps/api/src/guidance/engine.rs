//! Recommendation Engine — runs the four generators over one profile.
//!
//! The engine holds an immutable `KnowledgeBase` behind an `Arc` and no other
//! state; `recommend` is a pure function of (profile, knowledge base) and is
//! recomputed in full on every call.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::guidance::career::{self, CareerRecommendation};
use crate::guidance::jobs::{self, JobRecommendation};
use crate::guidance::knowledge_base::KnowledgeBase;
use crate::guidance::resolver::GoalSignals;
use crate::guidance::resume::{self, ResumeGuidance};
use crate::guidance::skill_gap::{self, SkillGapAnalysis};
use crate::guidance::taxonomy::{CareerPath, CareerTrack, ExperienceLevel, KeywordSet};
use crate::models::profile::UserProfile;

/// How the job pool, skill-gap slice and resume keywords are chosen.
///
/// - `Unified`: all three follow the resolved career track, so the four outputs
///   describe the same path. Software goals at professional or senior level
///   read the senior software slice.
/// - `Legacy`: the job pool and resume keywords follow their own keyword chains
///   and the skill gap is always read from the software-engineering slice at the
///   caller's level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    #[default]
    Unified,
    Legacy,
}

impl FromStr for ResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unified" => Ok(ResolutionMode::Unified),
            "legacy" => Ok(ResolutionMode::Legacy),
            other => Err(format!(
                "unknown resolution mode '{other}' (expected 'unified' or 'legacy')"
            )),
        }
    }
}

/// The four guidance records produced for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceBundle {
    pub career_recommendations: CareerRecommendation,
    pub skill_gap_analysis: SkillGapAnalysis,
    pub job_recommendations: Vec<JobRecommendation>,
    pub resume_guidance: ResumeGuidance,
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    kb: Arc<KnowledgeBase>,
    mode: ResolutionMode,
}

impl RecommendationEngine {
    pub fn new(kb: Arc<KnowledgeBase>, mode: ResolutionMode) -> Self {
        Self { kb, mode }
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn signals(&self, profile: &UserProfile) -> GoalSignals {
        GoalSignals::classify(&profile.career_goals, &profile.experience_level)
    }

    pub fn recommend(&self, profile: &UserProfile) -> GuidanceBundle {
        let signals = self.signals(profile);
        let (slice_level, slice_path) = self.skill_slice_key(&signals);
        debug!(
            track = ?signals.resolution.track,
            level = signals.experience_level.as_str(),
            certification_level = signals.resolution.certification_level.as_str(),
            slice = %format_args!("{}/{}", slice_level.as_str(), slice_path.as_str()),
            mode = ?self.mode,
            "Resolved career goals"
        );

        GuidanceBundle {
            career_recommendations: self.career_recommendation(&signals),
            skill_gap_analysis: self.skill_gap(profile, &signals),
            job_recommendations: self.job_recommendations(&signals),
            resume_guidance: resume::generate(profile, self.keyword_set(&signals)),
        }
    }

    pub fn career_recommendation(&self, signals: &GoalSignals) -> CareerRecommendation {
        let resolution = &signals.resolution;
        let certs = self
            .kb
            .certifications(resolution.career_path, resolution.certification_level);
        career::recommend(resolution.track, certs)
    }

    pub fn skill_gap(&self, profile: &UserProfile, signals: &GoalSignals) -> SkillGapAnalysis {
        let (level, path) = self.skill_slice_key(signals);
        skill_gap::analyze(profile, self.kb.career_path(level, path), &self.kb)
    }

    pub fn job_recommendations(&self, signals: &GoalSignals) -> Vec<JobRecommendation> {
        let (level, path) = self.job_pool_key(signals);
        jobs::recommend(self.kb.jobs(level, path), signals.experience_level)
    }

    /// Legacy mode keeps the goal-text keyword chain; unified mode follows the track.
    pub fn keyword_set(&self, signals: &GoalSignals) -> KeywordSet {
        match self.mode {
            ResolutionMode::Unified => signals.resolution.track.keyword_set(),
            ResolutionMode::Legacy => signals.keyword_set,
        }
    }

    fn skill_slice_key(&self, signals: &GoalSignals) -> (ExperienceLevel, CareerPath) {
        match self.mode {
            ResolutionMode::Unified => signals
                .resolution
                .track
                .skills_slice(signals.experience_level),
            ResolutionMode::Legacy => (signals.experience_level, CareerPath::SoftwareEngineer),
        }
    }

    fn job_pool_key(&self, signals: &GoalSignals) -> (ExperienceLevel, CareerPath) {
        const DEFAULT_POOL: (ExperienceLevel, CareerPath) =
            (ExperienceLevel::Student, CareerPath::SoftwareEngineer);

        match self.mode {
            ResolutionMode::Unified => {
                let key = self.skill_slice_key(signals);
                match (signals.resolution.track, key.1) {
                    (CareerTrack::TechnologyProfessional, CareerPath::SoftwareEngineer) => {
                        DEFAULT_POOL
                    }
                    _ => key,
                }
            }
            ResolutionMode::Legacy => signals
                .legacy_job_path
                .map(|path| (signals.experience_level, path))
                .unwrap_or(DEFAULT_POOL),
        }
    }
}
