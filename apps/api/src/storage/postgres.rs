use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::guidance::engine::GuidanceBundle;
use crate::models::profile::{ProfileRecord, ProfileRow, UserProfile};
use crate::storage::{GuidanceStore, StoredReport};

#[derive(Debug, FromRow)]
struct ReportRow {
    profile_id: Uuid,
    profile_updated_at: DateTime<Utc>,
    bundle: Json<GuidanceBundle>,
    created_at: DateTime<Utc>,
}

impl From<ReportRow> for StoredReport {
    fn from(row: ReportRow) -> Self {
        StoredReport {
            profile_id: row.profile_id,
            profile_updated_at: row.profile_updated_at,
            bundle: row.bundle.0,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL-backed store. Tables are created by `db::ensure_schema`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuidanceStore for PgStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, AppError> {
        let row: Option<ProfileRow> =
            sqlx::query_as("SELECT * FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(ProfileRecord::from))
    }

    async fn save_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<ProfileRecord, AppError> {
        // Upsert on user_id: the row id and created_at survive updates.
        let row: ProfileRow = sqlx::query_as(
            r#"
            INSERT INTO user_profiles
                (id, user_id, education, current_skills, career_goals, experience_level,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                education = EXCLUDED.education,
                current_skills = EXCLUDED.current_skills,
                career_goals = EXCLUDED.career_goals,
                experience_level = EXCLUDED.experience_level,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(Json(&profile.education))
        .bind(Json(&profile.current_skills))
        .bind(&profile.career_goals)
        .bind(&profile.experience_level)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_report(&self, user_id: &str) -> Result<Option<StoredReport>, AppError> {
        let row: Option<ReportRow> = sqlx::query_as(
            "SELECT profile_id, profile_updated_at, bundle, created_at \
             FROM guidance_reports WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(StoredReport::from))
    }

    async fn save_report(&self, user_id: &str, report: &StoredReport) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO guidance_reports
                (user_id, profile_id, profile_updated_at, bundle, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                profile_id = EXCLUDED.profile_id,
                profile_updated_at = EXCLUDED.profile_updated_at,
                bundle = EXCLUDED.bundle,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(user_id)
        .bind(report.profile_id)
        .bind(report.profile_updated_at)
        .bind(Json(&report.bundle))
        .bind(report.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
