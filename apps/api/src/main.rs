mod auth;
mod chat;
mod config;
mod dashboard;
mod db;
mod errors;
mod guidance;
mod models;
mod profile;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::guidance::engine::RecommendationEngine;
use crate::guidance::knowledge_base::KnowledgeBase;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{GuidanceStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Guidance API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    info!("Storage backend: {}", store.backend());

    let engine = RecommendationEngine::new(
        Arc::new(KnowledgeBase::builtin()),
        config.resolution_mode,
    );
    info!("Recommendation engine ready (resolution: {:?})", engine.mode());

    let cors = build_cors(&config.allowed_origins);

    let state = AppState {
        store,
        engine: Arc::new(engine),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise the in-memory store.
async fn build_store(config: &Config) -> Result<Arc<dyn GuidanceStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; profiles are kept in memory and lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
