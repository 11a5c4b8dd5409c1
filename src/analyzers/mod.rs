//! Dimension analyzers
//!
//! This module defines the core abstractions for readiness analysis:
//! - `Analyzer` trait that all six dimension analyzers implement
//! - `AnalysisContext` with the shared read-only inputs
//! - Percentage/blend helpers shared by every analyzer
//!
//! Analyzers are pure: same context in, same `DimensionScore` out, no shared
//! mutable state. The engine may therefore evaluate them in any order or in
//! parallel without changing the result.

mod compliance;
mod discoverability;
mod recovery;
mod security;
mod semantics;
mod usability;

pub use compliance::ComplianceAnalyzer;
pub use discoverability::DiscoverabilityAnalyzer;
pub use recovery::RecoveryAnalyzer;
pub use security::SecurityAnalyzer;
pub use semantics::SemanticsAnalyzer;
pub use usability::UsabilityAnalyzer;

use crate::config::ScoringConfig;
use crate::models::{Dimension, DimensionScore, DocumentStats, Grade, Signal, ValidationIssue};
use crate::openapi::OpenApiDocument;
use std::collections::BTreeMap;

/// Read-only inputs shared by all analyzers
pub struct AnalysisContext<'a> {
    pub document: &'a OpenApiDocument,
    pub stats: &'a DocumentStats,
    pub issues: &'a [ValidationIssue],
    pub config: &'a ScoringConfig,
}

/// Trait for all dimension analyzers
pub trait Analyzer: Send + Sync {
    /// Which dimension this analyzer scores
    fn dimension(&self) -> Dimension;

    /// Compute the dimension score from the shared context
    fn analyze(&self, ctx: &AnalysisContext) -> DimensionScore;
}

/// The six analyzers in dimension declaration order
pub fn all_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(ComplianceAnalyzer),
        Box::new(SemanticsAnalyzer),
        Box::new(UsabilityAnalyzer),
        Box::new(DiscoverabilityAnalyzer),
        Box::new(SecurityAnalyzer),
        Box::new(RecoveryAnalyzer),
    ]
}

/// Round and clamp a raw percentage into [0, 100]
pub(crate) fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Percentage of `hits` over `total`; an empty population scores 0.
///
/// Used for sub-factors that measure coverage of something that should
/// exist: no data means nothing to reward.
pub(crate) fn coverage(hits: usize, total: usize) -> u8 {
    coverage_or(hits, total, 0)
}

/// Percentage of `hits` over `total`, with an explicit neutral default for an
/// empty population.
///
/// Used for sub-factors that measure an inapplicable requirement (e.g.
/// pagination with zero list operations defaults to 100: nothing to
/// penalize).
pub(crate) fn coverage_or(hits: usize, total: usize, default: u8) -> u8 {
    if total == 0 {
        default
    } else {
        clamp_score(hits as f64 / total as f64 * 100.0)
    }
}

/// Assemble a `DimensionScore` from weighted sub-factors.
///
/// The dimension score is the rounded weighted blend of the already-clamped
/// sub-factor values, so the published invariant holds over exactly the
/// numbers emitted in `subFactors`.
pub(crate) fn assemble(
    dimension: Dimension,
    sub_factors: &[(&'static str, f64, u8)],
    signals: Vec<Signal>,
    improvement_tips: Vec<String>,
    external_tool_can_help: bool,
) -> DimensionScore {
    let raw: f64 = sub_factors
        .iter()
        .map(|(_, weight, value)| f64::from(*value) * weight)
        .sum();
    let score = clamp_score(raw);

    let mut factors = BTreeMap::new();
    for (name, _, value) in sub_factors {
        factors.insert((*name).to_string(), *value);
    }

    DimensionScore {
        dimension,
        score,
        grade: Grade::from_score(score),
        label: dimension.label().to_string(),
        description: dimension.description().to_string(),
        signals,
        sub_factors: factors,
        improvement_tips,
        external_tool_can_help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_rounds_and_defaults() {
        assert_eq!(coverage(0, 0), 0);
        assert_eq!(coverage_or(0, 0, 100), 100);
        assert_eq!(coverage(1, 3), 33);
        assert_eq!(coverage(2, 3), 67);
        assert_eq!(coverage(3, 3), 100);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(49.5), 50);
    }

    #[test]
    fn test_assemble_blends_rounded_sub_factors() {
        let score = assemble(
            Dimension::Security,
            &[("a", 0.5, 80), ("b", 0.5, 61)],
            vec![],
            vec![],
            false,
        );
        assert_eq!(score.score, 71); // 40 + 30.5 rounds to 71
        assert_eq!(score.sub_factors["a"], 80);
        assert_eq!(score.sub_factors["b"], 61);
        assert_eq!(score.grade, Grade::from_score(71));
    }

    #[test]
    fn test_all_analyzers_cover_each_dimension_once() {
        let dims: Vec<Dimension> = all_analyzers().iter().map(|a| a.dimension()).collect();
        assert_eq!(dims, Dimension::ALL.to_vec());
    }
}
