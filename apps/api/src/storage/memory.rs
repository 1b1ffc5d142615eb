use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileRecord, UserProfile};
use crate::storage::{GuidanceStore, StoredReport};

/// Process-lifetime store used when no database is configured.
/// Everything is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, ProfileRecord>>,
    reports: RwLock<HashMap<String, StoredReport>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuidanceStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, AppError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn save_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<ProfileRecord, AppError> {
        let now = Utc::now();
        let mut profiles = self.profiles.write().await;
        let record = profiles
            .entry(user_id.to_string())
            .and_modify(|existing| {
                existing.profile = profile.clone();
                existing.updated_at = now;
            })
            .or_insert_with(|| ProfileRecord {
                id: Uuid::new_v4(),
                user_id: user_id.to_string(),
                profile: profile.clone(),
                created_at: now,
                updated_at: now,
            });
        Ok(record.clone())
    }

    async fn get_report(&self, user_id: &str) -> Result<Option<StoredReport>, AppError> {
        Ok(self.reports.read().await.get(user_id).cloned())
    }

    async fn save_report(&self, user_id: &str, report: &StoredReport) -> Result<(), AppError> {
        self.reports
            .write()
            .await
            .insert(user_id.to_string(), report.clone());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::engine::{RecommendationEngine, ResolutionMode};
    use crate::guidance::knowledge_base::KnowledgeBase;
    use std::sync::Arc;

    fn profile(goals: &str) -> UserProfile {
        UserProfile {
            career_goals: goals.to_string(),
            experience_level: "student".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_profile_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_profile("nobody").await.unwrap().is_none());
        assert!(store.get_report("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_profile_upserts_and_keeps_identity() {
        let store = MemoryStore::new();
        let first = store
            .save_profile("demo_user_1", &profile("software"))
            .await
            .unwrap();
        let second = store
            .save_profile("demo_user_1", &profile("devops"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.profile.career_goals, "devops");

        let fetched = store.get_profile("demo_user_1").await.unwrap().unwrap();
        assert_eq!(fetched, second);
    }

    #[tokio::test]
    async fn test_profiles_are_isolated_per_user() {
        let store = MemoryStore::new();
        let a = store.save_profile("a", &profile("software")).await.unwrap();
        let b = store.save_profile("b", &profile("data")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(
            store.get_profile("a").await.unwrap().unwrap().profile.career_goals,
            "software"
        );
    }

    #[tokio::test]
    async fn test_save_report_replaces_previous() {
        let store = MemoryStore::new();
        let engine =
            RecommendationEngine::new(Arc::new(KnowledgeBase::builtin()), ResolutionMode::Unified);

        let record = store.save_profile("u", &profile("software")).await.unwrap();
        let first = StoredReport::for_profile(&record, engine.recommend(&record.profile));
        store.save_report("u", &first).await.unwrap();

        let record = store.save_profile("u", &profile("devops")).await.unwrap();
        let second = StoredReport::for_profile(&record, engine.recommend(&record.profile));
        store.save_report("u", &second).await.unwrap();

        let stored = store.get_report("u").await.unwrap().unwrap();
        assert_eq!(stored, second);
        assert_eq!(
            stored.bundle.career_recommendations.career_path,
            "DevOps/Site Reliability Engineering"
        );
        assert_eq!(store.backend(), "memory");
    }
}
