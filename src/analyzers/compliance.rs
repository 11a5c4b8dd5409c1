//! Foundational compliance analyzer
//!
//! Consumes the externally produced validation issues. The engine never
//! re-validates the document itself; it scores how clean the upstream
//! validators found it. Schema-related issues use a logarithmically damped
//! penalty: a handful of schema nits and a thousand of them differ in score,
//! but not 20x.

use crate::analyzers::{assemble, clamp_score, AnalysisContext, Analyzer};
use crate::models::{Dimension, DimensionScore, Severity, Signal, ValidationIssue};

/// Points deducted per validation error from the validity sub-factor
const VALIDITY_PENALTY_PER_ERROR: f64 = 12.0;
/// Lint deductions per error / warning
const LINT_PENALTY_PER_ERROR: f64 = 8.0;
const LINT_PENALTY_PER_WARNING: f64 = 2.0;
/// Points deducted per reference-related issue
const REF_PENALTY_PER_ISSUE: f64 = 15.0;
/// Cap on the damped schema-issue penalty
const MAX_SCHEMA_PENALTY: f64 = 50.0;

pub struct ComplianceAnalyzer;

impl ComplianceAnalyzer {
    fn is_ref_issue(ctx: &AnalysisContext, issue: &ValidationIssue) -> bool {
        let markers = &ctx.config.lexicon.ref_markers;
        markers.matches(&issue.message) || markers.matches(&issue.code)
    }

    fn is_schema_issue(ctx: &AnalysisContext, issue: &ValidationIssue) -> bool {
        let markers = &ctx.config.lexicon.schema_markers;
        markers.matches(&issue.message)
            || issue
                .path
                .as_ref()
                .is_some_and(|path| path.iter().any(|seg| markers.matches(seg)))
    }
}

impl Analyzer for ComplianceAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::FoundationalCompliance
    }

    fn analyze(&self, ctx: &AnalysisContext) -> DimensionScore {
        let errors = ctx
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warnings = ctx
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();
        let ref_issues = ctx
            .issues
            .iter()
            .filter(|i| Self::is_ref_issue(ctx, i))
            .count();
        let schema_issues = ctx
            .issues
            .iter()
            .filter(|i| Self::is_schema_issue(ctx, i))
            .count();

        let validity = clamp_score(100.0 - VALIDITY_PENALTY_PER_ERROR * errors as f64);
        let lint = clamp_score(
            100.0 - LINT_PENALTY_PER_ERROR * errors as f64
                - LINT_PENALTY_PER_WARNING * warnings as f64,
        );
        let refs = clamp_score(100.0 - REF_PENALTY_PER_ISSUE * ref_issues as f64);

        // Damped so many small schema nits do not compound linearly
        let schema_penalty =
            ((schema_issues as f64 + 1.0).log10() * 25.0).min(MAX_SCHEMA_PENALTY);
        let structure = clamp_score(100.0 - schema_penalty);

        let mut signals = Vec::new();
        if errors == 0 {
            signals.push(Signal::positive("No validation errors reported"));
        } else {
            signals.push(
                Signal::negative("Validation errors reported by upstream validators")
                    .with_count(errors),
            );
        }
        if warnings > 0 {
            signals.push(Signal::neutral("Validation warnings reported").with_count(warnings));
        }
        if ref_issues > 0 {
            signals.push(Signal::negative("Unresolved or broken references").with_count(ref_issues));
        }
        if schema_issues > 0 {
            signals.push(Signal::negative("Schema-related issues").with_count(schema_issues));
        }

        let mut tips = Vec::new();
        if validity < 100 {
            tips.push(format!(
                "Fix the {errors} validation error(s) so agents can trust the document structure"
            ));
        }
        if refs < 100 {
            tips.push("Resolve broken $ref pointers before anything else consumes them".to_string());
        }
        if structure < 100 {
            tips.push("Clean up schema-shape warnings to keep payload contracts unambiguous".to_string());
        }

        assemble(
            self.dimension(),
            &[
                ("specificationValidity", 0.35, validity),
                ("lintResults", 0.25, lint),
                ("referenceResolution", 0.25, refs),
                ("structuralIntegrity", 0.15, structure),
            ],
            signals,
            tips,
            true, // spec linters can fix most of this automatically
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::engine::stats::extract_stats;
    use crate::models::DocumentStats;
    use crate::openapi::OpenApiDocument;

    fn issue(severity: Severity, code: &str, message: &str) -> ValidationIssue {
        ValidationIssue {
            source: "validator".into(),
            code: code.into(),
            message: message.into(),
            severity,
            path: None,
        }
    }

    fn analyze(issues: &[ValidationIssue]) -> DimensionScore {
        let document = OpenApiDocument::default();
        let stats: DocumentStats = extract_stats(&document);
        let config = ScoringConfig::default();
        ComplianceAnalyzer.analyze(&AnalysisContext {
            document: &document,
            stats: &stats,
            issues,
            config: &config,
        })
    }

    #[test]
    fn test_clean_document_scores_100() {
        let score = analyze(&[]);
        assert_eq!(score.score, 100);
        assert!(score
            .signals
            .iter()
            .any(|s| s.message.contains("No validation errors")));
        assert!(score.improvement_tips.is_empty());
    }

    #[test]
    fn test_errors_penalize_validity_and_lint() {
        let score = analyze(&[issue(Severity::Error, "oas3-valid", "missing required field")]);
        assert_eq!(score.sub_factors["specificationValidity"], 88);
        assert_eq!(score.sub_factors["lintResults"], 92);
        // 88*0.35 + 92*0.25 + 100*0.25 + 100*0.15 = 93.8
        assert_eq!(score.score, 94);
    }

    #[test]
    fn test_ref_issues_detected_via_code_or_message() {
        let score = analyze(&[
            issue(Severity::Warning, "invalid-ref", "cannot resolve pointer"),
            issue(Severity::Warning, "w2", "broken reference to components"),
        ]);
        assert_eq!(score.sub_factors["referenceResolution"], 70);
    }

    #[test]
    fn test_schema_penalty_is_log_damped() {
        let many: Vec<ValidationIssue> = (0..999)
            .map(|i| issue(Severity::Info, "s", &format!("schema mismatch {i}")))
            .collect();
        let score = analyze(&many);
        // log10(1000) * 25 = 75, capped at 50
        assert_eq!(score.sub_factors["structuralIntegrity"], 50);

        let few = vec![issue(Severity::Info, "s", "schema mismatch")];
        let damped = analyze(&few);
        // log10(2) * 25 = 7.5 -> 92 or 93 after rounding
        assert!(damped.sub_factors["structuralIntegrity"] >= 92);
    }

    #[test]
    fn test_schema_issue_detected_via_path() {
        let mut schema_issue = issue(Severity::Warning, "w", "unexpected type");
        schema_issue.path = Some(vec!["components".into(), "schemas".into(), "User".into()]);
        let score = analyze(&[schema_issue]);
        assert!(score.sub_factors["structuralIntegrity"] < 100);
    }

    #[test]
    fn test_more_errors_never_raise_the_score() {
        let mut issues = Vec::new();
        let mut last = analyze(&issues).score;
        for i in 0..12 {
            issues.push(issue(Severity::Error, "e", &format!("problem {i}")));
            let next = analyze(&issues).score;
            assert!(next <= last, "score rose from {last} to {next}");
            last = next;
        }
    }
}
