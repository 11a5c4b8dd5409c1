//! AI discoverability analyzer
//!
//! Scores what helps an agent orient itself before making a single call:
//! request/response examples, operation tags, schema examples, and API-level
//! metadata (description, contact, license, external docs, servers).

use crate::analyzers::{assemble, clamp_score, coverage, AnalysisContext, Analyzer};
use crate::models::{Dimension, DimensionScore, Signal};
use crate::openapi::Operation;

/// Minimum API description length for the metadata credit
const MIN_API_DESCRIPTION: usize = 50;

fn has_any_example(op: &Operation) -> bool {
    let response_example = op
        .responses
        .values()
        .flat_map(|r| r.content.values())
        .any(|m| m.has_example());
    let request_example = op
        .request_body
        .as_ref()
        .map(|body| body.content.values().any(|m| m.has_example()))
        .unwrap_or(false);
    response_example || request_example
}

pub struct DiscoverabilityAnalyzer;

impl DiscoverabilityAnalyzer {
    /// Additive 0-100 metadata score. Full coverage, not just a title, is
    /// required to reach 100.
    fn metadata_score(ctx: &AnalysisContext) -> u8 {
        let doc = ctx.document;
        let mut points = 0u32;

        if doc
            .info
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() >= MIN_API_DESCRIPTION)
        {
            points += 20;
        }
        if doc.info.contact.is_some() {
            points += 15;
        }
        if doc.info.license.is_some() {
            points += 10;
        }
        if doc
            .external_docs
            .as_ref()
            .is_some_and(|e| !e.url.is_empty())
        {
            points += 15;
        }
        if !doc.servers.is_empty() {
            points += 20;
        }
        if doc
            .servers
            .iter()
            .any(|s| s.description.as_ref().is_some_and(|d| !d.is_empty()))
        {
            points += 20;
        }

        clamp_score(points as f64)
    }
}

impl Analyzer for DiscoverabilityAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::AiDiscoverability
    }

    fn analyze(&self, ctx: &AnalysisContext) -> DimensionScore {
        let op_count = ctx.stats.operation_count;

        let mut with_examples = 0;
        let mut with_tags = 0;
        for (_, _, op) in ctx.document.operations() {
            if has_any_example(op) {
                with_examples += 1;
            }
            if !op.tags.is_empty() {
                with_tags += 1;
            }
        }

        let schemas_with_example = ctx
            .document
            .components
            .schemas
            .values()
            .filter(|s| s.example.is_some())
            .count();

        let example_coverage = coverage(with_examples, op_count);
        let schema_examples = coverage(schemas_with_example, ctx.stats.schema_count);
        let tag_coverage = coverage(with_tags, op_count);
        let metadata = Self::metadata_score(ctx);

        let mut signals = Vec::new();
        if op_count > 0 && with_examples == op_count {
            signals.push(Signal::positive("Every operation ships an example payload"));
        } else if op_count > 0 {
            signals.push(
                Signal::negative("Operations without request or response examples")
                    .with_count(op_count - with_examples),
            );
        }
        if op_count > 0 && with_tags < op_count {
            signals.push(
                Signal::neutral("Untagged operations").with_count(op_count - with_tags),
            );
        }
        if metadata < 50 {
            signals.push(Signal::negative(
                "API-level metadata is sparse (description, contact, servers)",
            ));
        }

        let mut tips = Vec::new();
        if example_coverage < 100 {
            tips.push("Add request/response examples so agents can imitate real payloads".to_string());
        }
        if tag_coverage < 100 {
            tips.push("Tag operations so related functionality can be discovered together".to_string());
        }
        if metadata < 100 {
            tips.push(
                "Fill in API metadata: a long-form description, contact, license, and described servers".to_string(),
            );
        }

        assemble(
            self.dimension(),
            &[
                ("exampleCoverage", 0.35, example_coverage),
                ("schemaExamples", 0.20, schema_examples),
                ("tagCoverage", 0.20, tag_coverage),
                ("apiMetadata", 0.25, metadata),
            ],
            signals,
            tips,
            true, // example generators and doc tooling can close most gaps
        )
    }
}
