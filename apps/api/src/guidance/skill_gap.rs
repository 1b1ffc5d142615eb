//! Skill Gap Analyzer — required skills the profile lacks, plus how to learn them.
//!
//! Priority and acquisition time come from fixed tiers, independent of the profile.
//! Every skill that appears in `missing_skills` or `recommended_skills` gets
//! learning resources: the curated list when one exists, otherwise four
//! synthesized search links.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::guidance::knowledge_base::{
    CareerPathEntry, KnowledgeBase, LearningResource, TopicBreakdown,
};
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillPriority {
    High,
    Medium,
    Low,
}

const HIGH_PRIORITY: &[&str] = &[
    "Python",
    "JavaScript",
    "SQL",
    "Git",
    "Problem Solving",
    "Communication",
];
const MEDIUM_PRIORITY: &[&str] = &["React", "Node.js", "Docker", "AWS", "Tableau"];

/// Priority tier and estimated time to acquire a skill.
pub fn priority_tier(skill: &str) -> (SkillPriority, &'static str) {
    if HIGH_PRIORITY.contains(&skill) {
        (SkillPriority::High, "1-3 months")
    } else if MEDIUM_PRIORITY.contains(&skill) {
        (SkillPriority::Medium, "2-6 months")
    } else {
        (SkillPriority::Low, "3-12 months")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub missing_skills: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub skill_priority: BTreeMap<String, SkillPriority>,
    pub time_to_acquire: BTreeMap<String, String>,
    pub skill_categories: BTreeMap<String, String>,
    pub learning_resources: BTreeMap<String, Vec<LearningResource>>,
    pub skill_topics: BTreeMap<String, TopicBreakdown>,
}

/// Builds the four search-style resources used when no curated list exists.
/// Each site gets its own separator for spaces in the skill name.
pub fn fallback_resources(skill: &str) -> Vec<LearningResource> {
    vec![
        LearningResource::new(
            format!("Google '{skill}' Tutorial"),
            format!(
                "https://www.google.com/search?q={}+tutorial",
                skill.replace(' ', "+")
            ),
            "Search",
        ),
        LearningResource::new(
            format!("YouTube {skill} Course"),
            format!(
                "https://www.youtube.com/results?search_query={}+course",
                skill.replace(' ', "+")
            ),
            "Video",
        ),
        LearningResource::new(
            format!("Udemy {skill} Courses"),
            format!("https://www.udemy.com/topic/{}/", skill.replace(' ', "-")),
            "Course",
        ),
        LearningResource::new(
            format!("LinkedIn Learning {skill}"),
            format!(
                "https://www.linkedin.com/learning/search?keywords={}",
                skill.replace(' ', "%20")
            ),
            "Course",
        ),
    ]
}

/// Analyzes the gap between a knowledge-base slice and the profile's technical skills.
///
/// `entry` is `None` when the slice does not exist; the analysis is then empty
/// apart from the static category, resource and topic tables.
pub fn analyze(
    profile: &UserProfile,
    entry: Option<&CareerPathEntry>,
    kb: &KnowledgeBase,
) -> SkillGapAnalysis {
    let (required, recommended): (&[String], &[String]) = match entry {
        Some(e) => (e.required_skills.as_slice(), e.recommended_skills.as_slice()),
        None => (&[], &[]),
    };

    let current: HashSet<&str> = profile
        .current_skills
        .technical
        .iter()
        .map(String::as_str)
        .collect();

    let mut seen = HashSet::new();
    let missing_skills: Vec<String> = required
        .iter()
        .filter(|skill| !current.contains(skill.as_str()))
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect();

    let mut skill_priority = BTreeMap::new();
    let mut time_to_acquire = BTreeMap::new();
    let mut learning_resources = kb.curated_resources().clone();

    for skill in missing_skills.iter().chain(recommended.iter()) {
        let (priority, time) = priority_tier(skill);
        skill_priority.insert(skill.clone(), priority);
        time_to_acquire.insert(skill.clone(), time.to_string());
        if kb.skill_meta(skill).resources.is_none() {
            learning_resources.insert(skill.clone(), fallback_resources(skill));
        }
    }

    SkillGapAnalysis {
        missing_skills,
        recommended_skills: recommended.to_vec(),
        skill_priority,
        time_to_acquire,
        skill_categories: kb.skill_categories().clone(),
        learning_resources,
        skill_topics: kb.skill_topics().clone(),
    }
}

/// A single skill described on its own, independent of any profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDetail {
    pub skill: String,
    pub category: Option<String>,
    pub priority: SkillPriority,
    pub time_to_acquire: String,
    pub learning_resources: Vec<LearningResource>,
    pub topics: TopicBreakdown,
}

pub fn describe(skill: &str, kb: &KnowledgeBase) -> SkillDetail {
    let meta = kb.skill_meta(skill);
    let (priority, time) = priority_tier(skill);
    SkillDetail {
        skill: skill.to_string(),
        category: meta.category.map(str::to_string),
        priority,
        time_to_acquire: time.to_string(),
        learning_resources: meta
            .resources
            .map(<[LearningResource]>::to_vec)
            .unwrap_or_else(|| fallback_resources(skill)),
        topics: meta.topics.cloned().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::taxonomy::{CareerPath, ExperienceLevel};

    fn profile_with(technical: &[&str]) -> UserProfile {
        let mut profile = UserProfile::default();
        profile.current_skills.technical = technical.iter().map(|s| s.to_string()).collect();
        profile
    }

    fn student_software(kb: &KnowledgeBase) -> Option<&CareerPathEntry> {
        kb.career_path(ExperienceLevel::Student, CareerPath::SoftwareEngineer)
    }

    #[test]
    fn test_missing_skills_preserve_required_order() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze(&profile_with(&["Python"]), student_software(&kb), &kb);
        assert_eq!(
            analysis.missing_skills,
            vec![
                "JavaScript",
                "SQL",
                "Git",
                "Problem Solving",
                "Teamwork",
                "Data Structures",
                "APIs"
            ]
        );
    }

    #[test]
    fn test_empty_technical_skills_miss_everything() {
        let kb = KnowledgeBase::builtin();
        let entry = student_software(&kb).unwrap();
        let analysis = analyze(&profile_with(&[]), Some(entry), &kb);
        assert_eq!(analysis.missing_skills, entry.required_skills);
    }

    #[test]
    fn test_missing_is_subset_of_required_and_disjoint_from_current() {
        let kb = KnowledgeBase::builtin();
        let entry = student_software(&kb).unwrap();
        let current = ["Git", "SQL", "Rust", "APIs"];
        let analysis = analyze(&profile_with(&current), Some(entry), &kb);
        for skill in &analysis.missing_skills {
            assert!(entry.required_skills.contains(skill));
            assert!(!current.contains(&skill.as_str()));
        }
        assert_eq!(analysis.missing_skills.len(), 5);
    }

    #[test]
    fn test_every_listed_skill_has_tier_and_resources() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze(&profile_with(&[]), student_software(&kb), &kb);
        for skill in analysis
            .missing_skills
            .iter()
            .chain(analysis.recommended_skills.iter())
        {
            assert!(analysis.skill_priority.contains_key(skill), "{skill}");
            assert!(analysis.time_to_acquire.contains_key(skill), "{skill}");
            let resources = analysis.learning_resources.get(skill).unwrap();
            assert!(!resources.is_empty(), "{skill}");
        }
    }

    #[test]
    fn test_priority_tiers() {
        assert_eq!(priority_tier("Python"), (SkillPriority::High, "1-3 months"));
        assert_eq!(
            priority_tier("Communication"),
            (SkillPriority::High, "1-3 months")
        );
        assert_eq!(priority_tier("Tableau"), (SkillPriority::Medium, "2-6 months"));
        assert_eq!(priority_tier("Teamwork"), (SkillPriority::Low, "3-12 months"));
        assert_eq!(priority_tier("python"), (SkillPriority::Low, "3-12 months"));
    }

    #[test]
    fn test_fallback_resources_use_site_separators() {
        let resources = fallback_resources("Data Structures");
        assert_eq!(resources.len(), 4);
        assert_eq!(
            resources[0].url,
            "https://www.google.com/search?q=Data+Structures+tutorial"
        );
        assert_eq!(
            resources[1].url,
            "https://www.youtube.com/results?search_query=Data+Structures+course"
        );
        assert_eq!(resources[2].url, "https://www.udemy.com/topic/Data-Structures/");
        assert_eq!(
            resources[3].url,
            "https://www.linkedin.com/learning/search?keywords=Data%20Structures"
        );
        assert_eq!(resources[0].name, "Google 'Data Structures' Tutorial");
    }

    #[test]
    fn test_curated_resources_win_over_fallback() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze(&profile_with(&[]), student_software(&kb), &kb);
        let python = &analysis.learning_resources["Python"];
        assert_eq!(python[0].name, "Python Official Documentation");
    }

    #[test]
    fn test_missing_slice_yields_empty_gap() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze(&profile_with(&["Python"]), None, &kb);
        assert!(analysis.missing_skills.is_empty());
        assert!(analysis.recommended_skills.is_empty());
        assert!(analysis.skill_priority.is_empty());
        assert!(!analysis.skill_categories.is_empty());
    }

    #[test]
    fn test_describe_curated_skill() {
        let kb = KnowledgeBase::builtin();
        let detail = describe("Python", &kb);
        assert_eq!(detail.category.as_deref(), Some("Programming Language"));
        assert_eq!(detail.priority, SkillPriority::High);
        assert_eq!(detail.time_to_acquire, "1-3 months");
        assert_eq!(
            detail.learning_resources[0].name,
            "Python Official Documentation"
        );
        assert!(detail.topics.contains_key("Fundamentals"));
    }

    #[test]
    fn test_describe_unknown_skill_uses_fallbacks() {
        let kb = KnowledgeBase::builtin();
        let detail = describe("Basket Weaving", &kb);
        assert!(detail.category.is_none());
        assert_eq!(detail.priority, SkillPriority::Low);
        assert_eq!(detail.learning_resources, fallback_resources("Basket Weaving"));
        assert!(detail.topics.is_empty());
    }

    #[test]
    fn test_substituted_knowledge_base() {
        let mut kb = KnowledgeBase::empty();
        kb.insert_career_path(
            ExperienceLevel::Student,
            CareerPath::SoftwareEngineer,
            CareerPathEntry {
                required_skills: vec!["Rust".to_string(), "Python".to_string()],
                recommended_skills: vec!["Zig".to_string()],
                jobs: vec![],
            },
        );
        let analysis = analyze(&profile_with(&["Python"]), student_software(&kb), &kb);
        assert_eq!(analysis.missing_skills, vec!["Rust"]);
        assert_eq!(analysis.learning_resources.len(), 2);
        assert_eq!(analysis.skill_priority["Zig"], SkillPriority::Low);
    }
}
