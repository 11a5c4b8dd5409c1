//! Recommendation generator
//!
//! One recommendation per dimension that falls below its trigger threshold,
//! with a priority derived from how far it fell. Deterministic and total: a
//! perfect score yields an empty list.

use crate::config::ScoringConfig;
use crate::models::{Dimension, DimensionScore, Priority, Recommendation};

/// Generate the prioritized recommendation list.
///
/// Sorted stably by priority; ties keep dimension declaration order.
pub fn generate(dimensions: &[DimensionScore], config: &ScoringConfig) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = dimensions
        .iter()
        .filter_map(|d| {
            let thresholds = config.thresholds.get(d.dimension);
            if d.score >= thresholds.trigger {
                return None;
            }
            let escalated = d.score < thresholds.escalate_below;
            Some(build(d.dimension, d.score, escalated))
        })
        .collect();

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

fn build(dimension: Dimension, score: u8, escalated: bool) -> Recommendation {
    let priority = priority_for(dimension, escalated);
    let (title, description, impact) = template(dimension);
    Recommendation {
        priority,
        dimension,
        title: title.to_string(),
        description: format!("{description} (currently scoring {score}/100)"),
        impact: impact.to_string(),
        automatable: matches!(
            dimension,
            Dimension::FoundationalCompliance | Dimension::AiDiscoverability
        ),
    }
}

/// Priority tiers per dimension; `escalated` is "score below the
/// per-dimension escalation point".
fn priority_for(dimension: Dimension, escalated: bool) -> Priority {
    match dimension {
        Dimension::FoundationalCompliance | Dimension::Security => {
            if escalated {
                Priority::Critical
            } else {
                Priority::High
            }
        }
        Dimension::SemanticRichness
        | Dimension::AgentUsability
        | Dimension::ErrorRecoverability => {
            if escalated {
                Priority::High
            } else {
                Priority::Medium
            }
        }
        Dimension::AiDiscoverability => {
            if escalated {
                Priority::Medium
            } else {
                Priority::Low
            }
        }
    }
}

fn template(dimension: Dimension) -> (&'static str, &'static str, &'static str) {
    match dimension {
        Dimension::FoundationalCompliance => (
            "Resolve validation and reference issues",
            "Fix the errors reported by upstream validators, starting with broken $ref pointers",
            "Agents cannot trust or navigate a document that fails structural validation",
        ),
        Dimension::SemanticRichness => (
            "Describe operations, parameters, and schemas",
            "Add meaningful descriptions that name the action performed and the business object it touches",
            "Natural-language context is the main signal agents use to pick the right operation",
        ),
        Dimension::AgentUsability => (
            "Adopt agent-friendly operation conventions",
            "Add verb-prefixed operationIds, declared error responses, and pagination on list operations",
            "Predictable conventions let agents compose calls without trial and error",
        ),
        Dimension::AiDiscoverability => (
            "Add examples, tags, and API metadata",
            "Ship request/response examples, tag every operation, and complete the info section",
            "Examples and metadata let agents imitate working payloads instead of guessing",
        ),
        Dimension::Security => (
            "Declare and apply security schemes",
            "Define schemes under components.securitySchemes, cover every operation, and enforce HTTPS",
            "Agents need a declared, consistent way to authenticate before they can act",
        ),
        Dimension::ErrorRecoverability => (
            "Make error responses machine-readable",
            "Declare 4xx/5xx responses with structured payloads carrying code and retry fields",
            "Structured errors turn failures into recoverable states instead of dead ends",
        ),
    }
}

/// The single recommendation emitted for the parse-failure state
pub fn parse_failure_recommendation() -> Recommendation {
    Recommendation {
        priority: Priority::Critical,
        dimension: Dimension::FoundationalCompliance,
        title: "Fix document parsing".to_string(),
        description: "The document could not be parsed as YAML or JSON; nothing else can be scored until it parses".to_string(),
        impact: "Unparseable specifications are completely unusable for agents".to_string(),
        automatable: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{all_analyzers, AnalysisContext};
    use crate::engine::stats::extract_stats;
    use crate::openapi::OpenApiDocument;

    fn dimensions_with_scores(scores: [u8; 6]) -> Vec<DimensionScore> {
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
    fn test_perfect_scores_yield_no_recommendations() {
        let recs = generate(&dimensions_with_scores([100; 6]), &ScoringConfig::default());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_scores_at_trigger_do_not_fire() {
        // Exactly at each trigger: 80/70/70/60/80/60
        let recs = generate(
            &dimensions_with_scores([80, 70, 70, 60, 80, 60]),
            &ScoringConfig::default(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_priority_escalation() {
        // Compliance far below its escalation point -> critical; just below
        // trigger -> high.
        let recs = generate(
            &dimensions_with_scores([40, 100, 100, 100, 100, 100]),
            &ScoringConfig::default(),
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Critical);

        let recs = generate(
            &dimensions_with_scores([75, 100, 100, 100, 100, 100]),
            &ScoringConfig::default(),
        );
        assert_eq!(recs[0].priority, Priority::High);
    }

    #[test]
    fn test_sorted_by_priority_with_stable_ties() {
        let recs = generate(
            &dimensions_with_scores([40, 50, 50, 20, 40, 10]),
            &ScoringConfig::default(),
        );
        // compliance 40 -> critical, security 40 -> critical,
        // semantic 50 -> medium, usability 50 -> medium,
        // discoverability 20 -> medium, recoverability 10 -> high
        let order: Vec<(Priority, Dimension)> =
            recs.iter().map(|r| (r.priority, r.dimension)).collect();
        assert_eq!(
            order,
            vec![
                (Priority::Critical, Dimension::FoundationalCompliance),
                (Priority::Critical, Dimension::Security),
                (Priority::High, Dimension::ErrorRecoverability),
                (Priority::Medium, Dimension::SemanticRichness),
                (Priority::Medium, Dimension::AgentUsability),
                (Priority::Medium, Dimension::AiDiscoverability),
            ]
        );
    }
}
