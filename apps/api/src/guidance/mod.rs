//! Guidance engine — rule-based career recommendations over a static knowledge base.
//!
//! `engine::RecommendationEngine` is the entry point; the remaining modules are
//! the resolver and the four generators it drives.

pub mod career;
pub mod engine;
pub mod jobs;
pub mod knowledge_base;
pub mod resolver;
pub mod resume;
pub mod skill_gap;
pub mod taxonomy;
