//! Career recommendation — the track narrative plus matching certifications.

use serde::{Deserialize, Serialize};

use crate::guidance::knowledge_base::Certification;
use crate::guidance::taxonomy::CareerTrack;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub career_path: String,
    pub short_term_goals: Vec<String>,
    pub long_term_goals: Vec<String>,
    pub industry_trends: Vec<String>,
    pub salary_potential: String,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

const INDUSTRY_TRENDS: &[&str] = &[
    "AI/ML integration",
    "Cloud computing",
    "Remote work",
    "Continuous learning",
    "Industry certifications",
];

/// How many certification names are promoted into the long-term goals.
const HEADLINE_CERTIFICATIONS: usize = 2;

struct TrackOutlook {
    short_term: [&'static str; 3],
    long_term: [&'static str; 3],
    salary_potential: &'static str,
}

fn outlook(track: CareerTrack) -> TrackOutlook {
    match track {
        CareerTrack::SoftwareEngineering => TrackOutlook {
            short_term: [
                "Complete online courses in advanced topics",
                "Build personal projects",
                "Network with professionals",
            ],
            long_term: [
                "Get industry certifications",
                "Specialize in a niche area",
                "Consider leadership roles",
            ],
            salary_potential: "₹8-35 LPA depending on experience and location",
        },
        CareerTrack::FullStackDevelopment => TrackOutlook {
            short_term: [
                "Master React/Node.js fundamentals",
                "Build full-stack projects",
                "Learn deployment",
            ],
            long_term: [
                "Get MERN stack certifications",
                "Master cloud platforms",
                "Build scalable applications",
            ],
            salary_potential: "₹6-40 LPA depending on expertise",
        },
        CareerTrack::DataScience => TrackOutlook {
            short_term: [
                "Master Python and statistics",
                "Learn ML algorithms",
                "Work on real datasets",
            ],
            long_term: [
                "Get TensorFlow/AWS ML certifications",
                "Specialize in NLP/CV",
                "Pursue PhD/research",
            ],
            salary_potential: "₹8-70 LPA depending on specialization",
        },
        CareerTrack::DevOps => TrackOutlook {
            short_term: [
                "Learn Docker and Kubernetes",
                "Master CI/CD pipelines",
                "Understand cloud platforms",
            ],
            long_term: [
                "Get AWS/Azure DevOps certifications",
                "Master infrastructure as code",
                "Focus on reliability",
            ],
            salary_potential: "₹8-55 LPA depending on cloud expertise",
        },
        CareerTrack::Cybersecurity => TrackOutlook {
            short_term: [
                "Learn ethical hacking basics",
                "Master networking concepts",
                "Get security fundamentals",
            ],
            long_term: [
                "Earn CEH/CISSP certifications",
                "Specialize in penetration testing",
                "Focus on compliance",
            ],
            salary_potential: "₹6-50 LPA depending on specialization",
        },
        CareerTrack::DataAnalytics => TrackOutlook {
            short_term: [
                "Learn SQL and Python",
                "Practice with real datasets",
                "Get data visualization skills",
            ],
            long_term: [
                "Pursue advanced analytics",
                "Consider data science role",
                "Get industry certifications",
            ],
            salary_potential: "₹5-35 LPA depending on specialization",
        },
        CareerTrack::TechnologyProfessional => TrackOutlook {
            short_term: [
                "Identify specific career interests",
                "Build foundational skills",
                "Gain practical experience",
            ],
            long_term: [
                "Specialize in chosen field",
                "Pursue advanced education",
                "Build professional network",
            ],
            salary_potential: "₹5-30 LPA depending on role and experience",
        },
    }
}

/// Builds the recommendation for a resolved track. When certifications exist,
/// "Get certified: A, B" leads the long-term goals.
pub fn recommend(track: CareerTrack, certifications: &[Certification]) -> CareerRecommendation {
    let TrackOutlook {
        short_term,
        long_term,
        salary_potential,
    } = outlook(track);

    let mut long_term_goals: Vec<String> = long_term.iter().map(|s| s.to_string()).collect();
    if !certifications.is_empty() {
        let names: Vec<&str> = certifications
            .iter()
            .take(HEADLINE_CERTIFICATIONS)
            .map(|c| c.name.as_str())
            .collect();
        long_term_goals.insert(0, format!("Get certified: {}", names.join(", ")));
    }

    CareerRecommendation {
        career_path: track.display_name().to_string(),
        short_term_goals: short_term.iter().map(|s| s.to_string()).collect(),
        long_term_goals,
        industry_trends: INDUSTRY_TRENDS.iter().map(|s| s.to_string()).collect(),
        salary_potential: salary_potential.to_string(),
        certifications: certifications.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::knowledge_base::KnowledgeBase;
    use crate::guidance::taxonomy::{CareerPath, CertificationLevel};

    #[test]
    fn test_certifications_lead_long_term_goals() {
        let kb = KnowledgeBase::builtin();
        let certs = kb.certifications(CareerPath::SoftwareEngineer, CertificationLevel::EntryLevel);
        let rec = recommend(CareerTrack::SoftwareEngineering, certs);
        assert_eq!(rec.career_path, "Software Engineering");
        assert_eq!(rec.certifications.len(), 3);
        assert_eq!(rec.long_term_goals.len(), 4);
        assert_eq!(
            rec.long_term_goals[0],
            "Get certified: Google IT Support Professional Certificate, AWS Certified Cloud Practitioner"
        );
    }

    #[test]
    fn test_single_certification_headline() {
        let kb = KnowledgeBase::builtin();
        let certs = kb.certifications(CareerPath::FullStackDeveloper, CertificationLevel::Advanced);
        let rec = recommend(CareerTrack::FullStackDevelopment, certs);
        assert_eq!(
            rec.long_term_goals[0],
            "Get certified: AWS Certified Solutions Architect"
        );
    }

    #[test]
    fn test_no_certifications_leaves_goals_untouched() {
        let rec = recommend(CareerTrack::TechnologyProfessional, &[]);
        assert_eq!(rec.career_path, "Technology Professional");
        assert!(rec.certifications.is_empty());
        assert_eq!(rec.long_term_goals.len(), 3);
        assert_eq!(rec.long_term_goals[0], "Specialize in chosen field");
        assert_eq!(rec.industry_trends.len(), 5);
    }
}
