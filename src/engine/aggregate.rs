//! Composite aggregator
//!
//! Combines the six dimension scores into one weighted overall score, maps
//! it to a grade and a readiness level, and renders the templated summary.

use crate::config::ScoringConfig;
use crate::models::{DimensionScore, DocumentStats, Grade, ReadinessLevel};

/// Overall score, grade, readiness level, and summary text
#[derive(Debug, Clone)]
pub struct Composite {
    pub overall_score: u8,
    pub grade: Grade,
    pub readiness_level: ReadinessLevel,
    pub summary: String,
}

/// Weighted composite of the six dimension scores.
///
/// `overall = round(Σ score × weight)`; the weights were validated to sum to
/// exactly 1.0 when the config was built.
pub fn aggregate(
    dimensions: &[DimensionScore],
    stats: &DocumentStats,
    config: &ScoringConfig,
) -> Composite {
    debug_assert!((config.weights.total() - 1.0).abs() < 1e-9);

    let raw: f64 = dimensions
        .iter()
        .map(|d| f64::from(d.score) * config.weights.get(d.dimension))
        .sum();
    let overall_score = raw.round().clamp(0.0, 100.0) as u8;
    let grade = Grade::from_score(overall_score);
    let readiness_level = ReadinessLevel::from_score(overall_score);

    Composite {
        overall_score,
        grade,
        readiness_level,
        summary: summarize(overall_score, readiness_level, dimensions, stats),
    }
}

/// Templated summary; carries no scoring logic of its own.
///
/// Ties for strongest/weakest resolve to dimension declaration order, which
/// keeps the text replayable.
fn summarize(
    overall: u8,
    level: ReadinessLevel,
    dimensions: &[DimensionScore],
    stats: &DocumentStats,
) -> String {
    let mut summary = format!(
        "This API scores {overall}/100 and is rated \"{level}\" for autonomous agents. \
         Analyzed {} operation(s), {} schema(s), and {} security scheme(s) across six dimensions.",
        stats.operation_count, stats.schema_count, stats.security_scheme_count
    );

    let strongest = dimensions
        .iter()
        .reduce(|best, d| if d.score > best.score { d } else { best });
    let weakest = dimensions
        .iter()
        .reduce(|worst, d| if d.score < worst.score { d } else { worst });
    if let (Some(strong), Some(weak)) = (strongest, weakest) {
        if strong.dimension != weak.dimension {
            summary.push_str(&format!(
                " Strongest dimension: {} ({}); weakest: {} ({}).",
                strong.label, strong.score, weak.label, weak.score
            ));
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{all_analyzers, AnalysisContext};
    use crate::engine::stats::extract_stats;
    use crate::openapi::OpenApiDocument;

    fn scored_dimensions(scores: [u8; 6]) -> Vec<DimensionScore> {
        // Run the real analyzers on an empty document, then pin the scores
        // we want to aggregate.
        let document = OpenApiDocument::default();
        let stats = extract_stats(&document);
        let config = ScoringConfig::default();
        let ctx = AnalysisContext {
            document: &document,
            stats: &stats,
            issues: &[],
            config: &config,
        };
        all_analyzers()
            .iter()
            .zip(scores)
            .map(|(a, score)| {
                let mut d = a.analyze(&ctx);
                d.score = score;
                d
            })
            .collect()
    }

    #[test]
    fn test_weighted_composite() {
        let dims = scored_dimensions([100, 70, 80, 35, 20, 0]);
        let composite = aggregate(&dims, &DocumentStats::default(), &ScoringConfig::default());
        // 25 + 14 + 16 + 5.25 + 2 + 0 = 62.25 -> 62
        assert_eq!(composite.overall_score, 62);
        assert_eq!(composite.grade, Grade::D);
        assert_eq!(composite.readiness_level, ReadinessLevel::PartiallyReady);
    }

    #[test]
    fn test_all_perfect_is_agent_ready() {
        let dims = scored_dimensions([100; 6]);
        let composite = aggregate(&dims, &DocumentStats::default(), &ScoringConfig::default());
        assert_eq!(composite.overall_score, 100);
        assert_eq!(composite.grade, Grade::A);
        assert_eq!(composite.readiness_level, ReadinessLevel::AgentReady);
    }

    #[test]
    fn test_summary_mentions_operation_count() {
        let dims = scored_dimensions([50; 6]);
        let stats = DocumentStats {
            operation_count: 17,
            ..DocumentStats::default()
        };
        let composite = aggregate(&dims, &stats, &ScoringConfig::default());
        assert!(!composite.summary.is_empty());
        assert!(composite.summary.contains("17 operation(s)"));
    }
}
