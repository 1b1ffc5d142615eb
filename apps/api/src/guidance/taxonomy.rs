//! Closed vocabularies used by the guidance engine.
//!
//! Profiles arrive with free-form tags; they are parsed into these enums once
//! at the resolver boundary. Unrecognised experience tags become
//! `ExperienceLevel::Unknown` and fall through to the default branches.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Student,
    Fresher,
    EntryLevel,
    Intermediate,
    MidLevel,
    Senior,
    Professional,
    #[serde(other)]
    Unknown,
}

impl ExperienceLevel {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "student" => ExperienceLevel::Student,
            "fresher" => ExperienceLevel::Fresher,
            "entry_level" => ExperienceLevel::EntryLevel,
            "intermediate" => ExperienceLevel::Intermediate,
            "mid_level" => ExperienceLevel::MidLevel,
            "senior" => ExperienceLevel::Senior,
            "professional" => ExperienceLevel::Professional,
            _ => ExperienceLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Student => "student",
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::EntryLevel => "entry_level",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::MidLevel => "mid_level",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Professional => "professional",
            ExperienceLevel::Unknown => "unknown",
        }
    }
}

/// Knowledge-base cluster of skills, jobs and certifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerPath {
    SoftwareEngineer,
    SeniorSoftwareEngineer,
    FullStackDeveloper,
    DataAnalyst,
    DataScientist,
    DevopsEngineer,
    CybersecurityAnalyst,
}

impl CareerPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerPath::SoftwareEngineer => "software_engineer",
            CareerPath::SeniorSoftwareEngineer => "senior_software_engineer",
            CareerPath::FullStackDeveloper => "full_stack_developer",
            CareerPath::DataAnalyst => "data_analyst",
            CareerPath::DataScientist => "data_scientist",
            CareerPath::DevopsEngineer => "devops_engineer",
            CareerPath::CybersecurityAnalyst => "cybersecurity_analyst",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationLevel {
    EntryLevel,
    Intermediate,
    Advanced,
}

impl CertificationLevel {
    pub fn for_experience(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Professional | ExperienceLevel::MidLevel | ExperienceLevel::Senior => {
                CertificationLevel::Advanced
            }
            ExperienceLevel::Fresher | ExperienceLevel::Intermediate => {
                CertificationLevel::Intermediate
            }
            _ => CertificationLevel::EntryLevel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationLevel::EntryLevel => "entry_level",
            CertificationLevel::Intermediate => "intermediate",
            CertificationLevel::Advanced => "advanced",
        }
    }
}

/// The career direction a goal statement resolves to.
///
/// A track names the recommendation shown to the user and picks the
/// knowledge-base paths behind it. `DataAnalytics` shares the data-science
/// certifications but keeps the analyst skill and job slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerTrack {
    SoftwareEngineering,
    FullStackDevelopment,
    DataScience,
    DevOps,
    Cybersecurity,
    DataAnalytics,
    TechnologyProfessional,
}

impl CareerTrack {
    pub fn display_name(&self) -> &'static str {
        match self {
            CareerTrack::SoftwareEngineering => "Software Engineering",
            CareerTrack::FullStackDevelopment => "Full Stack Development",
            CareerTrack::DataScience => "Data Science & Machine Learning",
            CareerTrack::DevOps => "DevOps/Site Reliability Engineering",
            CareerTrack::Cybersecurity => "Cybersecurity",
            CareerTrack::DataAnalytics => "Data Analytics",
            CareerTrack::TechnologyProfessional => "Technology Professional",
        }
    }

    /// Path whose certification catalogue backs this track.
    pub fn certification_path(&self) -> CareerPath {
        match self {
            CareerTrack::SoftwareEngineering | CareerTrack::TechnologyProfessional => {
                CareerPath::SoftwareEngineer
            }
            CareerTrack::FullStackDevelopment => CareerPath::FullStackDeveloper,
            CareerTrack::DataScience | CareerTrack::DataAnalytics => CareerPath::DataScientist,
            CareerTrack::DevOps => CareerPath::DevopsEngineer,
            CareerTrack::Cybersecurity => CareerPath::CybersecurityAnalyst,
        }
    }

    /// Path whose skills and jobs back this track.
    pub fn skills_path(&self) -> CareerPath {
        match self {
            CareerTrack::SoftwareEngineering | CareerTrack::TechnologyProfessional => {
                CareerPath::SoftwareEngineer
            }
            CareerTrack::FullStackDevelopment => CareerPath::FullStackDeveloper,
            CareerTrack::DataScience => CareerPath::DataScientist,
            CareerTrack::DevOps => CareerPath::DevopsEngineer,
            CareerTrack::Cybersecurity => CareerPath::CybersecurityAnalyst,
            CareerTrack::DataAnalytics => CareerPath::DataAnalyst,
        }
    }

    /// Knowledge-base slice `(level, path)` holding this track's skills and jobs
    /// for a caller at `level`. Software goals at professional or senior level
    /// move to the senior software slice, which is keyed at `Professional`.
    pub fn skills_slice(&self, level: ExperienceLevel) -> (ExperienceLevel, CareerPath) {
        match (self, level) {
            (
                CareerTrack::SoftwareEngineering | CareerTrack::TechnologyProfessional,
                ExperienceLevel::Professional | ExperienceLevel::Senior,
            ) => (
                ExperienceLevel::Professional,
                CareerPath::SeniorSoftwareEngineer,
            ),
            _ => (level, self.skills_path()),
        }
    }

    /// Resume keyword list matching this track.
    pub fn keyword_set(&self) -> KeywordSet {
        match self {
            CareerTrack::SoftwareEngineering
            | CareerTrack::FullStackDevelopment
            | CareerTrack::DevOps => KeywordSet::Software,
            CareerTrack::DataScience | CareerTrack::DataAnalytics => KeywordSet::Data,
            CareerTrack::Cybersecurity | CareerTrack::TechnologyProfessional => {
                KeywordSet::General
            }
        }
    }
}

/// Which keyword list the resume guidance suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSet {
    Software,
    Data,
    General,
}
