use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS user_profiles (
        id UUID PRIMARY KEY,
        user_id TEXT NOT NULL UNIQUE,
        education JSONB NOT NULL DEFAULT '{}'::jsonb,
        current_skills JSONB NOT NULL DEFAULT '{}'::jsonb,
        career_goals TEXT NOT NULL DEFAULT '',
        experience_level TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS guidance_reports (
        user_id TEXT PRIMARY KEY,
        profile_id UUID NOT NULL REFERENCES user_profiles(id) ON DELETE CASCADE,
        profile_updated_at TIMESTAMPTZ NOT NULL,
        bundle JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the profile and report tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to apply schema")?;
    }
    info!("Database schema ready");
    Ok(())
}
