//! Security analyzer
//!
//! Scores declared security schemes, how many operations are actually
//! covered by one, and whether every server URL is safe to call over.

use crate::analyzers::{assemble, clamp_score, coverage, AnalysisContext, Analyzer};
use crate::models::{Dimension, DimensionScore, Signal};

/// Points per declared scheme; three or more saturate the sub-factor
const POINTS_PER_SCHEME: f64 = 40.0;

pub struct SecurityAnalyzer;

impl Analyzer for SecurityAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Security
    }

    fn analyze(&self, ctx: &AnalysisContext) -> DimensionScore {
        let doc = ctx.document;
        let scheme_count = ctx.stats.security_scheme_count;
        let schemes = clamp_score(scheme_count as f64 * POINTS_PER_SCHEME);

        let global_security = !doc.security.is_empty();
        let protected = doc
            .operations()
            .filter(|(_, _, op)| {
                global_security || op.security.as_ref().is_some_and(|s| !s.is_empty())
            })
            .count();
        let op_coverage = coverage(protected, ctx.stats.operation_count);

        // Vacuously secure with zero servers: the sub-factor measures the
        // absence of a plain-HTTP server.
        let https = if doc.servers.iter().all(|s| s.is_secure_url()) {
            100
        } else {
            0
        };

        let mut signals = Vec::new();
        if scheme_count == 0 {
            signals.push(Signal::negative("No security schemes declared"));
        } else {
            signals.push(Signal::positive("Security schemes declared").with_count(scheme_count));
            let friendly = doc
                .components
                .security_schemes
                .values()
                .filter(|s| s.is_agent_friendly())
                .count();
            if friendly > 0 {
                signals.push(
                    Signal::positive("OAuth2 / API-key / bearer schemes agents can drive")
                        .with_count(friendly),
                );
            }
        }
        if https == 0 {
            signals.push(Signal::negative("At least one server uses plain HTTP"));
        }
        if ctx.stats.operation_count > 0 && protected < ctx.stats.operation_count {
            signals.push(
                Signal::negative("Operations not covered by any security requirement")
                    .with_count(ctx.stats.operation_count - protected),
            );
        }

        let mut tips = Vec::new();
        if schemes < 100 {
            tips.push("Declare security schemes under components.securitySchemes".to_string());
        }
        if op_coverage < 100 {
            tips.push(
                "Apply a global security requirement or per-operation security blocks".to_string(),
            );
        }
        if https == 0 {
            tips.push("Serve the API exclusively over HTTPS".to_string());
        }

        assemble(
            self.dimension(),
            &[
                ("securitySchemes", 0.40, schemes),
                ("operationCoverage", 0.40, op_coverage),
                ("httpsEnforcement", 0.20, https),
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
        SecurityAnalyzer.analyze(&AnalysisContext {
            document: &document,
            stats: &stats,
            issues: &[],
            config: &config,
        })
    }

    #[test]
    fn test_scheme_count_saturates_at_three() {
        let score = analyze(
            r#"
openapi: 3.0.3
components:
  securitySchemes:
    a: {type: apiKey}
    b: {type: oauth2}
    c: {type: http, scheme: bearer}
    d: {type: http, scheme: basic}
"#,
        );
        assert_eq!(score.sub_factors["securitySchemes"], 100);
    }

    #[test]
    fn test_global_security_covers_every_operation() {
        let score = analyze(
            r#"
openapi: 3.0.3
security:
  - bearer: []
paths:
  /users:
    get: {}
    post: {}
"#,
        );
        assert_eq!(score.sub_factors["operationCoverage"], 100);
    }

    #[test]
    fn test_per_operation_security_counts() {
        let score = analyze(
            r#"
openapi: 3.0.3
paths:
  /users:
    get:
      security:
        - bearer: []
    post: {}
"#,
        );
        assert_eq!(score.sub_factors["operationCoverage"], 50);
    }

    #[test]
    fn test_plain_http_server_zeroes_https() {
        let score = analyze("openapi: 3.0.3\nservers:\n  - url: http://api.example.com\n");
        assert_eq!(score.sub_factors["httpsEnforcement"], 0);

        let score = analyze("openapi: 3.0.3\nservers:\n  - url: https://api.example.com\n");
        assert_eq!(score.sub_factors["httpsEnforcement"], 100);
    }

    #[test]
    fn test_unsecured_spec_scores_only_the_https_default() {
        let score = analyze("openapi: 3.0.3\npaths:\n  /users:\n    get: {}\n");
        assert_eq!(score.score, 20);
    }
}
