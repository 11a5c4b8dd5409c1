//! Configuration module for agentgauge
//!
//! This module handles:
//! - The immutable scoring methodology (weights, thresholds, vocabulary)
//! - Per-project overrides from `agentgauge.toml`
//! - Methodology validation (weight closure, threshold ranges)

mod scoring_config;

pub use scoring_config::{
    default_config_toml, load_scoring_config, DimensionThresholds, DimensionWeights,
    RecommendationThresholds, ScoringConfig, METHODOLOGY_VERSION,
};
