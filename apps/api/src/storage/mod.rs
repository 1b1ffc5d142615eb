//! Guidance Store — persistence for profiles and computed guidance reports.
//!
//! Two backends sit behind the same trait: `PgStore` when `DATABASE_URL` is
//! configured, `MemoryStore` otherwise. `AppState` carries an
//! `Arc<dyn GuidanceStore>` chosen at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::guidance::engine::GuidanceBundle;
use crate::models::profile::{ProfileRecord, UserProfile};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// The last guidance bundle computed for a user, tagged with the profile
/// version it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub profile_id: Uuid,
    pub profile_updated_at: DateTime<Utc>,
    pub bundle: GuidanceBundle,
    pub created_at: DateTime<Utc>,
}

impl StoredReport {
    pub fn for_profile(record: &ProfileRecord, bundle: GuidanceBundle) -> Self {
        Self {
            profile_id: record.id,
            profile_updated_at: record.updated_at,
            bundle,
            created_at: Utc::now(),
        }
    }

    /// True when the report was computed from exactly this profile version.
    pub fn is_current_for(&self, record: &ProfileRecord) -> bool {
        self.profile_id == record.id && self.profile_updated_at == record.updated_at
    }
}

#[async_trait]
pub trait GuidanceStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, AppError>;

    /// Creates the user's profile or replaces its fields, keeping `id` and
    /// `created_at` and bumping `updated_at`.
    async fn save_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<ProfileRecord, AppError>;

    async fn get_report(&self, user_id: &str) -> Result<Option<StoredReport>, AppError>;

    /// Replaces any previous report for the user.
    async fn save_report(&self, user_id: &str, report: &StoredReport) -> Result<(), AppError>;

    /// Backend name, for logs and `/health`.
    fn backend(&self) -> &'static str;
}
