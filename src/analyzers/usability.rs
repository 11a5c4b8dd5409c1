//! Agent usability analyzer
//!
//! Scores the conventions that make operations machine-drivable: stable
//! operationIds with verb-prefix names, idempotency, declared error
//! responses, and pagination on list operations.
//!
//! List-operation detection is heuristic on purpose: a GET whose path ends
//! in `s` or contains "list"/"search". It misclassifies some resources
//! (`/status`, plural singletons); the behavior is pinned because changing
//! it changes scores for real specs.

use crate::analyzers::{assemble, coverage, coverage_or, AnalysisContext, Analyzer};
use crate::models::{Dimension, DimensionScore, Signal};
use crate::openapi::{Method, Operation, PathItem};

pub struct UsabilityAnalyzer;

impl UsabilityAnalyzer {
    fn is_list_operation(ctx: &AnalysisContext, path: &str, method: Method) -> bool {
        method == Method::Get
            && (path.ends_with('s') || ctx.config.lexicon.list_markers.matches(path))
    }

    fn has_pagination(ctx: &AnalysisContext, item: &PathItem, op: &Operation) -> bool {
        item.parameters
            .iter()
            .chain(op.parameters.iter())
            .any(|p| ctx.config.lexicon.pagination_params.matches_exact(&p.name))
    }
}

impl Analyzer for UsabilityAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::AgentUsability
    }

    fn analyze(&self, ctx: &AnalysisContext) -> DimensionScore {
        let op_count = ctx.stats.operation_count;

        let mut with_id = 0;
        let mut well_named = 0;
        let mut idempotent = 0;
        let mut with_errors = 0;
        let mut list_ops = 0;
        let mut paginated = 0;

        for (path, item) in &ctx.document.paths {
            for (method, op) in item.operations() {
                let id = op.operation_id.as_deref().unwrap_or("");
                if !id.is_empty() {
                    with_id += 1;
                    if ctx.config.lexicon.id_verb_prefixes.matches_prefix(id) {
                        well_named += 1;
                    }
                }
                if method.is_idempotent() || op.idempotency_extension() {
                    idempotent += 1;
                }
                if op.has_error_response() {
                    with_errors += 1;
                }
                if Self::is_list_operation(ctx, path, method) {
                    list_ops += 1;
                    if Self::has_pagination(ctx, item, op) {
                        paginated += 1;
                    }
                }
            }
        }

        let id_coverage = coverage(with_id, op_count);
        // Normalized over all operations: a missing id also fails the naming
        // convention, which keeps this sub-factor monotone.
        let id_quality = coverage(well_named, op_count);
        let idempotency = coverage(idempotent, op_count);
        let error_coverage = coverage(with_errors, op_count);
        let pagination = coverage_or(paginated, list_ops, 100);

        let mut signals = Vec::new();
        if op_count > 0 && with_id == op_count {
            signals.push(Signal::positive("Every operation declares an operationId"));
        } else if op_count > 0 {
            signals.push(
                Signal::negative("Operations missing an operationId").with_count(op_count - with_id),
            );
        }
        if op_count > 0 && with_errors < op_count {
            signals.push(
                Signal::negative("Operations without any error response")
                    .with_count(op_count - with_errors),
            );
        }
        if list_ops > 0 && paginated == list_ops {
            signals.push(Signal::positive("All list operations support pagination"));
        } else if list_ops > 0 {
            signals.push(
                Signal::negative("List operations without pagination parameters")
                    .with_count(list_ops - paginated),
            );
        }

        let mut tips = Vec::new();
        if id_coverage < 100 {
            tips.push("Give every operation a unique operationId so agents can address it".to_string());
        }
        if id_quality < 100 {
            tips.push(
                "Name operationIds with a verb prefix and a capitalized noun, e.g. listOrders".to_string(),
            );
        }
        if error_coverage < 100 {
            tips.push("Declare at least one 4xx/5xx response per operation".to_string());
        }
        if pagination < 100 {
            tips.push("Add page/limit/cursor parameters to list operations".to_string());
        }

        assemble(
            self.dimension(),
            &[
                ("operationIdCoverage", 0.30, id_coverage),
                ("operationIdQuality", 0.20, id_quality),
                ("idempotencySupport", 0.20, idempotency),
                ("errorResponseCoverage", 0.20, error_coverage),
                ("paginationSupport", 0.10, pagination),
            ],
            signals,
            tips,
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::engine::stats::extract_stats;
    use crate::openapi::parse_document;

    fn analyze(yaml: &str) -> DimensionScore {
        let document = parse_document(yaml).unwrap();
        let stats = extract_stats(&document);
        let config = ScoringConfig::default();
        UsabilityAnalyzer.analyze(&AnalysisContext {
            document: &document,
            stats: &stats,
            issues: &[],
            config: &config,
        })
    }

    #[test]
    fn test_pagination_defaults_to_100_without_list_operations() {
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /order/{id}:
    get:
      operationId: getOrder
"#,
        );
        assert_eq!(score.sub_factors["paginationSupport"], 100);
    }

    #[test]
    fn test_list_detection_heuristic() {
        // Path ending in `s` and GET -> list operation without pagination
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /users:
    get:
      operationId: listUsers
"#,
        );
        assert_eq!(score.sub_factors["paginationSupport"], 0);

        // Same path, POST only -> no list operation
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /users:
    post:
      operationId: createUser
"#,
        );
        assert_eq!(score.sub_factors["paginationSupport"], 100);
    }

    #[test]
    fn test_search_marker_makes_a_list_operation() {
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /search/order:
    get:
      operationId: searchOrders
      parameters:
        - name: cursor
          in: query
"#,
        );
        assert_eq!(score.sub_factors["paginationSupport"], 100);
    }

    #[test]
    fn test_path_level_pagination_parameter_counts() {
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /users:
    parameters:
      - name: limit
        in: query
    get:
      operationId: listUsers
"#,
        );
        assert_eq!(score.sub_factors["paginationSupport"], 100);
    }

    #[test]
    fn test_idempotency_by_method_and_extension() {
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /jobs:
    post:
      operationId: submitJob
      x-idempotent: true
  /jobs/{id}:
    patch:
      operationId: updateJob
"#,
        );
        // POST with the flag counts, PATCH without it does not
        assert_eq!(score.sub_factors["idempotencySupport"], 50);
    }

    #[test]
    fn test_naming_quality_counts_missing_ids_as_failures() {
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /users:
    get:
      operationId: listUsers
    post: {}
"#,
        );
        assert_eq!(score.sub_factors["operationIdCoverage"], 50);
        assert_eq!(score.sub_factors["operationIdQuality"], 50);
    }

    #[test]
    fn test_error_response_coverage() {
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /users:
    get:
      operationId: listUsers
      responses:
        '200':
          description: ok
        '404':
          description: missing
"#,
        );
        assert_eq!(score.sub_factors["errorResponseCoverage"], 100);
    }
}
