use anyhow::{Context, Result};

use crate::guidance::engine::ResolutionMode;

const DEFAULT_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8000",
];

/// Application configuration loaded from environment variables.
/// Every variable is optional; without `DATABASE_URL` the in-memory store is used.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub allowed_origins: Vec<String>,
    pub resolution_mode: ResolutionMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let allowed_origins = match non_blank("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        let resolution_mode = match non_blank("GUIDANCE_RESOLUTION") {
            Some(raw) => raw
                .parse::<ResolutionMode>()
                .map_err(|e| anyhow::anyhow!("GUIDANCE_RESOLUTION is invalid: {e}"))?,
            None => ResolutionMode::default(),
        };

        Ok(Config {
            database_url: non_blank("DATABASE_URL"),
            allowed_origins,
            resolution_mode,
            port: non_blank("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_blank("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
        assert!(config.database_url.is_none());
        assert_eq!(config.resolution_mode, ResolutionMode::Unified);
        assert_eq!(config.allowed_origins.len(), 3);
        assert_eq!(config.allowed_origins[0], "http://localhost:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("DATABASE_URL", "postgres://localhost/guidance"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("GUIDANCE_RESOLUTION", "legacy"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/guidance")
        );
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.resolution_mode, ResolutionMode::Legacy);
    }

    #[test]
    fn test_blank_database_url_means_memory_store() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("GUIDANCE_RESOLUTION", "hybrid")]).is_err());
    }
}
