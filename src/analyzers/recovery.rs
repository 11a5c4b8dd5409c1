//! Error recoverability analyzer
//!
//! An agent that hits a 429 needs to know it hit a 429, why, and when to try
//! again. This analyzer scores declared error responses and, for operations
//! that have them, whether the error payload is structured with recognizable
//! error-code and retry fields.

use crate::analyzers::{assemble, coverage, AnalysisContext, Analyzer};
use crate::models::{Dimension, DimensionScore, Signal};
use crate::openapi::{Components, Operation, SchemaObject};

fn error_schemas<'a>(
    components: &'a Components,
    op: &'a Operation,
) -> impl Iterator<Item = &'a SchemaObject> {
    op.error_responses()
        .flat_map(|(_, response)| response.content.values())
        .filter_map(|media| media.schema.as_ref())
        .map(|schema| components.resolve(schema))
}

pub struct RecoveryAnalyzer;

impl Analyzer for RecoveryAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::ErrorRecoverability
    }

    fn analyze(&self, ctx: &AnalysisContext) -> DimensionScore {
        let components = &ctx.document.components;
        let lexicon = &ctx.config.lexicon;

        let mut ops_with_errors = 0;
        let mut structured = 0;
        let mut with_error_code = 0;
        let mut with_retry = 0;

        for (_, _, op) in ctx.document.operations() {
            if !op.has_error_response() {
                continue;
            }
            ops_with_errors += 1;

            if error_schemas(components, op).next().is_some() {
                structured += 1;
            }
            if error_schemas(components, op).any(|schema| {
                schema
                    .properties
                    .keys()
                    .any(|name| lexicon.error_code_fields.matches_exact(name))
            }) {
                with_error_code += 1;
            }
            if error_schemas(components, op).any(|schema| {
                schema
                    .properties
                    .keys()
                    .any(|name| lexicon.retry_fields.matches_exact(name))
            }) {
                with_retry += 1;
            }
        }

        let error_coverage = coverage(ops_with_errors, ctx.stats.operation_count);
        // The remaining sub-factors are restricted to operations that declare
        // an error response; with none of those there is nothing to reward.
        let structured_errors = coverage(structured, ops_with_errors);
        let error_code_support = coverage(with_error_code, ops_with_errors);
        let retry_support = coverage(with_retry, ops_with_errors);

        let mut signals = Vec::new();
        if ctx.stats.operation_count > 0 && ops_with_errors == 0 {
            signals.push(Signal::negative("No operation declares an error response"));
        } else if ops_with_errors > 0 {
            signals.push(
                Signal::positive("Operations declaring error responses").with_count(ops_with_errors),
            );
            if structured < ops_with_errors {
                signals.push(
                    Signal::negative("Error responses without a schema")
                        .with_count(ops_with_errors - structured),
                );
            }
            if with_retry > 0 {
                signals.push(
                    Signal::positive("Error payloads carry retry guidance").with_count(with_retry),
                );
            }
        }

        let mut tips = Vec::new();
        if error_coverage < 100 {
            tips.push("Declare 4xx/5xx responses so agents can plan for failure".to_string());
        }
        if structured_errors < 100 {
            tips.push("Give error responses a JSON schema instead of free text".to_string());
        }
        if error_code_support < 100 {
            tips.push("Include a machine-readable code field in error payloads".to_string());
        }
        if retry_support < 100 {
            tips.push("Expose retry_after/retryable fields so agents know when to retry".to_string());
        }

        assemble(
            self.dimension(),
            &[
                ("errorResponseCoverage", 0.35, error_coverage),
                ("structuredErrors", 0.30, structured_errors),
                ("errorCodeSupport", 0.20, error_code_support),
                ("retryGuidance", 0.15, retry_support),
            ],
            signals,
            tips,
            false,
        )
    }
}
