//! Scoring methodology configuration
//!
//! The whole methodology — dimension weights, recommendation thresholds, and
//! the detection vocabulary — is one immutable value passed into the engine.
//! A compiled-in default ships with the binary; projects may override parts
//! of it from an `agentgauge.toml` in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # agentgauge.toml
//!
//! [weights]
//! foundational_compliance = 0.25
//! semantic_richness = 0.20
//! agent_usability = 0.20
//! ai_discoverability = 0.15
//! security = 0.10
//! error_recoverability = 0.10
//!
//! [thresholds.security]
//! trigger = 80
//! escalate_below = 50
//!
//! [lexicon]
//! action_verbs = ["create", "retrieve", "archive"]
//! ```

use crate::classify::Lexicon;
use crate::models::Dimension;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Bumped whenever a default weight, threshold, or word list changes
pub const METHODOLOGY_VERSION: &str = "3";

/// Weights for the six scoring dimensions (must sum to exactly 1.0)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DimensionWeights {
    pub foundational_compliance: f64,
    pub semantic_richness: f64,
    pub agent_usability: f64,
    pub ai_discoverability: f64,
    pub security: f64,
    pub error_recoverability: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            foundational_compliance: 0.25,
            semantic_richness: 0.20,
            agent_usability: 0.20,
            ai_discoverability: 0.15,
            security: 0.10,
            error_recoverability: 0.10,
        }
    }
}

impl DimensionWeights {
    /// Weight for one dimension
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::FoundationalCompliance => self.foundational_compliance,
            Dimension::SemanticRichness => self.semantic_richness,
            Dimension::AgentUsability => self.agent_usability,
            Dimension::AiDiscoverability => self.ai_discoverability,
            Dimension::Security => self.security,
            Dimension::ErrorRecoverability => self.error_recoverability,
        }
    }

    /// Sum over all six dimensions
    pub fn total(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

/// Recommendation trigger and priority-escalation point for one dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DimensionThresholds {
    /// Scores below this trigger a recommendation
    pub trigger: u8,
    /// Scores below this escalate the recommendation priority one tier
    pub escalate_below: u8,
}

impl Default for DimensionThresholds {
    fn default() -> Self {
        Self {
            trigger: 70,
            escalate_below: 40,
        }
    }
}

/// Per-dimension recommendation thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecommendationThresholds {
    pub foundational_compliance: DimensionThresholds,
    pub semantic_richness: DimensionThresholds,
    pub agent_usability: DimensionThresholds,
    pub ai_discoverability: DimensionThresholds,
    pub security: DimensionThresholds,
    pub error_recoverability: DimensionThresholds,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            foundational_compliance: DimensionThresholds {
                trigger: 80,
                escalate_below: 50,
            },
            semantic_richness: DimensionThresholds {
                trigger: 70,
                escalate_below: 40,
            },
            agent_usability: DimensionThresholds {
                trigger: 70,
                escalate_below: 40,
            },
            ai_discoverability: DimensionThresholds {
                trigger: 60,
                escalate_below: 30,
            },
            security: DimensionThresholds {
                trigger: 80,
                escalate_below: 50,
            },
            error_recoverability: DimensionThresholds {
                trigger: 60,
                escalate_below: 30,
            },
        }
    }
}

impl RecommendationThresholds {
    pub fn get(&self, dimension: Dimension) -> DimensionThresholds {
        match dimension {
            Dimension::FoundationalCompliance => self.foundational_compliance,
            Dimension::SemanticRichness => self.semantic_richness,
            Dimension::AgentUsability => self.agent_usability,
            Dimension::AiDiscoverability => self.ai_discoverability,
            Dimension::Security => self.security,
            Dimension::ErrorRecoverability => self.error_recoverability,
        }
    }
}

/// The complete, immutable scoring methodology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Methodology version recorded for reproducibility
    pub version: Option<String>,
    pub weights: DimensionWeights,
    pub thresholds: RecommendationThresholds,
    pub lexicon: Lexicon,
}

impl ScoringConfig {
    /// Validate weight closure and threshold ranges.
    ///
    /// The six weights must sum to exactly 1.0 (within f64 tolerance); every
    /// threshold must lie in [0, 100] with the escalation point at or below
    /// the trigger.
    pub fn validate(&self) -> Result<()> {
        let total = self.weights.total();
        if (total - 1.0).abs() > 1e-9 {
            bail!("dimension weights must sum to 1.0, got {total}");
        }
        for dim in Dimension::ALL {
            let w = self.weights.get(dim);
            if !(0.0..=1.0).contains(&w) {
                bail!("weight for {dim} out of range: {w}");
            }
            let t = self.thresholds.get(dim);
            if t.trigger > 100 {
                bail!("trigger threshold for {dim} out of range: {}", t.trigger);
            }
            if t.escalate_below > t.trigger {
                bail!(
                    "escalation point for {dim} ({}) above its trigger ({})",
                    t.escalate_below,
                    t.trigger
                );
            }
        }
        Ok(())
    }
}

/// Load the scoring configuration for a working directory.
///
/// Reads `agentgauge.toml` when present; a missing file yields the compiled-in
/// default, and a malformed or invalid file logs a warning and falls back to
/// the default rather than aborting the run.
pub fn load_scoring_config(dir: &Path) -> ScoringConfig {
    let toml_path = dir.join("agentgauge.toml");
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded scoring config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    debug!("Using default scoring config");
    ScoringConfig::default()
}

fn load_toml_config(path: &Path) -> Result<ScoringConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ScoringConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Commented starter `agentgauge.toml` written by `agentgauge init`
pub fn default_config_toml() -> String {
    let defaults = ScoringConfig {
        version: Some(METHODOLOGY_VERSION.to_string()),
        ..ScoringConfig::default()
    };
    let body = toml::to_string_pretty(&defaults)
        .unwrap_or_else(|_| String::from("# failed to render defaults\n"));
    format!(
        "# agentgauge scoring methodology\n\
         #\n\
         # Every value below matches the compiled-in default; delete anything\n\
         # you do not want to override. Weights must sum to exactly 1.0.\n\n{body}"
    )
}
