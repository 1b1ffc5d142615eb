//! Resume Guidance Generator — strengths, improvements and keywords from profile shape.

use serde::{Deserialize, Serialize};

use crate::guidance::taxonomy::KeywordSet;
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeGuidance {
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub suggested_sections: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub ats_friendly_tips: Vec<String>,
}

const SUGGESTED_SECTIONS: &[&str] = &[
    "Professional Summary",
    "Skills",
    "Professional Experience",
    "Education",
    "Projects",
    "Certifications",
];

const ATS_TIPS: &[&str] = &[
    "Use standard fonts (Arial, Calibri)",
    "Include relevant keywords from job descriptions",
    "Use quantifiable achievements",
    "Keep file format as .docx or .pdf",
    "Avoid tables and complex formatting",
];

const SOFTWARE_KEYWORDS: &[&str] = &[
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "Git",
    "Agile",
    "Scrum",
];

const DATA_KEYWORDS: &[&str] = &[
    "Python",
    "SQL",
    "Tableau",
    "Excel",
    "Statistics",
    "Data Analysis",
    "Visualization",
];

const GENERAL_KEYWORDS: &[&str] = &[
    "Problem Solving",
    "Communication",
    "Teamwork",
    "Project Management",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn keywords_for(set: KeywordSet) -> &'static [&'static str] {
    match set {
        KeywordSet::Software => SOFTWARE_KEYWORDS,
        KeywordSet::Data => DATA_KEYWORDS,
        KeywordSet::General => GENERAL_KEYWORDS,
    }
}

pub fn generate(profile: &UserProfile, keyword_set: KeywordSet) -> ResumeGuidance {
    let skills = &profile.current_skills;

    let mut strengths = Vec::new();
    if profile.degree().is_some() {
        strengths.push(format!(
            "Strong educational background in {}",
            profile.field_of_study().unwrap_or("your field")
        ));
    }
    if !skills.technical.is_empty() {
        let top: Vec<&str> = skills.technical.iter().take(3).map(String::as_str).collect();
        strengths.push(format!("Technical skills in {}", top.join(", ")));
    }
    if !skills.soft.is_empty() {
        strengths.push("Good soft skills foundation".to_string());
    }

    let mut improvements = Vec::new();
    if skills.certifications.is_empty() {
        improvements.push("Add relevant certifications to strengthen your profile".to_string());
    }
    if skills.technical.len() < 3 {
        improvements.push("Expand your technical skill set".to_string());
    }
    improvements.push("Include quantifiable achievements and metrics".to_string());

    ResumeGuidance {
        strengths,
        areas_for_improvement: improvements,
        suggested_sections: owned(SUGGESTED_SECTIONS),
        keyword_suggestions: owned(keywords_for(keyword_set)),
        ats_friendly_tips: owned(ATS_TIPS),
    }
}
