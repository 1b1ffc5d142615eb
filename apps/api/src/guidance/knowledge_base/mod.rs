//! Knowledge Base — the static dataset the guidance engine matches profiles against.
//!
//! Built once at startup via `KnowledgeBase::builtin()` and shared read-only
//! behind an `Arc`. Tests can assemble a substitute through `KnowledgeBase::empty()`
//! and the `insert_*` methods.

mod careers;
mod certifications;
mod skills;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::guidance::taxonomy::{CareerPath, CertificationLevel, ExperienceLevel};

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl LearningResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind: kind.into(),
        }
    }
}

/// A job listing as stored in the knowledge base. Salary bands and links are
/// optional; the job recommender fills in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary_fresher: Option<String>,
    pub salary_intermediate: Option<String>,
    pub salary_senior: Option<String>,
    pub apply_link: Option<String>,
    pub linkedin_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub link: String,
    pub duration: String,
    pub cost: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerPathEntry {
    /// Ordered; skill-gap output follows this order.
    pub required_skills: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub jobs: Vec<JobListing>,
}

/// Everything known about a single skill.
#[derive(Debug, Clone, Copy)]
pub struct SkillMeta<'a> {
    pub category: Option<&'a str>,
    pub resources: Option<&'a [LearningResource]>,
    pub topics: Option<&'a BTreeMap<String, Vec<String>>>,
}

pub type TopicBreakdown = BTreeMap<String, Vec<String>>;

// ────────────────────────────────────────────────────────────────────────────
// Knowledge base
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    career_paths: HashMap<(ExperienceLevel, CareerPath), CareerPathEntry>,
    certifications: HashMap<(CareerPath, CertificationLevel), Vec<Certification>>,
    skill_categories: BTreeMap<String, String>,
    learning_resources: BTreeMap<String, Vec<LearningResource>>,
    skill_topics: BTreeMap<String, TopicBreakdown>,
}

impl KnowledgeBase {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The curated dataset shipped with the service.
    pub fn builtin() -> Self {
        let mut kb = Self::empty();
        careers::load(&mut kb);
        certifications::load(&mut kb);
        skills::load(&mut kb);
        kb
    }

    pub fn insert_career_path(
        &mut self,
        level: ExperienceLevel,
        path: CareerPath,
        entry: CareerPathEntry,
    ) {
        self.career_paths.insert((level, path), entry);
    }

    pub fn insert_certifications(
        &mut self,
        path: CareerPath,
        level: CertificationLevel,
        certifications: Vec<Certification>,
    ) {
        self.certifications.insert((path, level), certifications);
    }

    pub fn insert_skill_category(&mut self, skill: &str, category: &str) {
        self.skill_categories
            .insert(skill.to_string(), category.to_string());
    }

    pub fn insert_learning_resources(&mut self, skill: &str, resources: Vec<LearningResource>) {
        self.learning_resources.insert(skill.to_string(), resources);
    }

    pub fn insert_skill_topics(&mut self, skill: &str, topics: TopicBreakdown) {
        self.skill_topics.insert(skill.to_string(), topics);
    }

    pub fn career_path(&self, level: ExperienceLevel, path: CareerPath) -> Option<&CareerPathEntry> {
        self.career_paths.get(&(level, path))
    }

    /// Jobs for a slice; an unknown slice yields no jobs.
    pub fn jobs(&self, level: ExperienceLevel, path: CareerPath) -> &[JobListing] {
        self.career_path(level, path)
            .map(|entry| entry.jobs.as_slice())
            .unwrap_or(&[])
    }

    /// Certifications for a path at a level; an unknown key yields an empty slice.
    pub fn certifications(&self, path: CareerPath, level: CertificationLevel) -> &[Certification] {
        self.certifications
            .get(&(path, level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn learning_resources(&self, skill: &str) -> Option<&[LearningResource]> {
        self.learning_resources.get(skill).map(Vec::as_slice)
    }

    pub fn curated_resources(&self) -> &BTreeMap<String, Vec<LearningResource>> {
        &self.learning_resources
    }

    pub fn skill_categories(&self) -> &BTreeMap<String, String> {
        &self.skill_categories
    }

    pub fn skill_topics(&self) -> &BTreeMap<String, TopicBreakdown> {
        &self.skill_topics
    }

    pub fn skill_meta(&self, skill: &str) -> SkillMeta<'_> {
        SkillMeta {
            category: self.skill_categories.get(skill).map(String::as_str),
            resources: self.learning_resources(skill),
            topics: self.skill_topics.get(skill),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Data helpers shared by the dataset modules
// ────────────────────────────────────────────────────────────────────────────

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn topics(groups: &[(&str, &[&str])]) -> TopicBreakdown {
    groups
        .iter()
        .map(|(category, items)| (category.to_string(), strings(items)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_student_software_slice() {
        let kb = KnowledgeBase::builtin();
        let entry = kb
            .career_path(ExperienceLevel::Student, CareerPath::SoftwareEngineer)
            .expect("student software slice present");
        assert_eq!(entry.required_skills.len(), 8);
        assert_eq!(entry.required_skills[0], "Python");
        let companies: Vec<&str> = entry.jobs.iter().map(|j| j.company.as_str()).collect();
        assert_eq!(companies, vec!["Google", "Amazon", "Microsoft"]);
    }

    #[test]
    fn test_unknown_slice_is_empty_not_error() {
        let kb = KnowledgeBase::builtin();
        assert!(kb
            .career_path(ExperienceLevel::Unknown, CareerPath::SoftwareEngineer)
            .is_none());
        assert!(kb
            .jobs(ExperienceLevel::Fresher, CareerPath::DevopsEngineer)
            .is_empty());
        assert!(kb
            .certifications(CareerPath::DataAnalyst, CertificationLevel::Advanced)
            .is_empty());
    }

    #[test]
    fn test_every_path_has_all_certification_levels() {
        let kb = KnowledgeBase::builtin();
        for path in [
            CareerPath::SoftwareEngineer,
            CareerPath::FullStackDeveloper,
            CareerPath::DataScientist,
            CareerPath::DevopsEngineer,
            CareerPath::CybersecurityAnalyst,
        ] {
            for level in [
                CertificationLevel::EntryLevel,
                CertificationLevel::Intermediate,
                CertificationLevel::Advanced,
            ] {
                assert!(
                    !kb.certifications(path, level).is_empty(),
                    "{} / {} has no certifications",
                    path.as_str(),
                    level.as_str()
                );
            }
        }
    }

    #[test]
    fn test_skill_meta_combines_tables() {
        let kb = KnowledgeBase::builtin();
        let meta = kb.skill_meta("Python");
        assert_eq!(meta.category, Some("Programming Language"));
        assert_eq!(meta.resources.map(<[_]>::len), Some(4));
        assert!(meta.topics.unwrap().contains_key("Fundamentals"));

        let unknown = kb.skill_meta("Basket Weaving");
        assert!(unknown.category.is_none());
        assert!(unknown.resources.is_none());
        assert!(unknown.topics.is_none());
    }

    #[test]
    fn test_learning_resource_serializes_type_field() {
        let resource = LearningResource::new("Docs", "https://example.com", "Documentation");
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "Documentation");
        assert!(json.get("kind").is_none());
    }
}
