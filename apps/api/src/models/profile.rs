use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentSkills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Profile as submitted by the caller. The engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub education: Map<String, Value>,
    pub current_skills: CurrentSkills,
    pub career_goals: String,
    pub experience_level: String,
}

impl UserProfile {
    /// `education.degree`, when present as a non-empty value.
    pub fn degree(&self) -> Option<&Value> {
        self.education.get("degree").filter(|v| is_present(v))
    }

    pub fn field_of_study(&self) -> Option<&str> {
        self.education
            .get("field")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

/// A stored profile, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: String,
    pub education: Json<Map<String, Value>>,
    pub current_skills: Json<CurrentSkills>,
    pub career_goals: String,
    pub experience_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for ProfileRecord {
    fn from(row: ProfileRow) -> Self {
        ProfileRecord {
            id: row.id,
            user_id: row.user_id,
            profile: UserProfile {
                education: row.education.0,
                current_skills: row.current_skills.0,
                career_goals: row.career_goals,
                experience_level: row.experience_level,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserializes_without_optional_skill_lists() {
        let profile: UserProfile = serde_json::from_value(json!({
            "education": {"degree": "B.Tech", "field": "Computer Science"},
            "current_skills": {"technical": ["Python"]},
            "career_goals": "software engineer",
            "experience_level": "student"
        }))
        .unwrap();
        assert_eq!(profile.current_skills.technical, vec!["Python"]);
        assert!(profile.current_skills.soft.is_empty());
        assert!(profile.current_skills.certifications.is_empty());
        assert_eq!(profile.field_of_study(), Some("Computer Science"));
    }

    #[test]
    fn test_blank_degree_is_absent() {
        let mut profile = UserProfile::default();
        profile
            .education
            .insert("degree".to_string(), json!("   "));
        assert!(profile.degree().is_none());
        profile.education.insert("degree".to_string(), json!(null));
        assert!(profile.degree().is_none());
        profile
            .education
            .insert("degree".to_string(), json!("M.Sc"));
        assert!(profile.degree().is_some());
    }

    #[test]
    fn test_record_flattens_profile_fields() {
        let record = ProfileRecord {
            id: Uuid::new_v4(),
            user_id: "demo_user_1".to_string(),
            profile: UserProfile {
                career_goals: "data".to_string(),
                experience_level: "student".to_string(),
                ..Default::default()
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["career_goals"], "data");
        assert_eq!(json["user_id"], "demo_user_1");
        assert!(json.get("profile").is_none());
    }
}
