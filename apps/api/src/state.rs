use std::sync::Arc;

use crate::guidance::engine::RecommendationEngine;
use crate::storage::GuidanceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profile and report persistence. `PgStore` or `MemoryStore`, chosen at startup.
    pub store: Arc<dyn GuidanceStore>,
    pub engine: Arc<RecommendationEngine>,
}
