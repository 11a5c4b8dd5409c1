//! Semantic richness analyzer
//!
//! Measures how much natural language the document gives an agent to work
//! with: operation descriptions and summaries, parameter and schema
//! descriptions, and a vocabulary check rewarding descriptions that name
//! both an action and the business object it acts on.

use crate::analyzers::{assemble, coverage, AnalysisContext, Analyzer};
use crate::models::{Dimension, DimensionScore, Signal};

/// Minimum lengths for a description to count as meaningful
const MIN_OPERATION_DESCRIPTION: usize = 20;
const MIN_SUMMARY: usize = 10;
const MIN_PARAMETER_DESCRIPTION: usize = 10;
const MIN_SCHEMA_DESCRIPTION: usize = 15;

fn at_least(text: Option<&String>, min: usize) -> bool {
    text.is_some_and(|t| t.chars().count() >= min)
}

pub struct SemanticsAnalyzer;

impl Analyzer for SemanticsAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::SemanticRichness
    }

    fn analyze(&self, ctx: &AnalysisContext) -> DimensionScore {
        let lexicon = &ctx.config.lexicon;
        let op_count = ctx.stats.operation_count;

        let mut described_ops = 0;
        let mut summarized_ops = 0;
        let mut described_params = 0;
        let mut language_hits = 0;

        for item in ctx.document.paths.values() {
            described_params += item
                .parameters
                .iter()
                .filter(|p| at_least(p.description.as_ref(), MIN_PARAMETER_DESCRIPTION))
                .count();

            for (_, op) in item.operations() {
                if at_least(op.description.as_ref(), MIN_OPERATION_DESCRIPTION) {
                    described_ops += 1;
                }
                if at_least(op.summary.as_ref(), MIN_SUMMARY) {
                    summarized_ops += 1;
                }
                described_params += op
                    .parameters
                    .iter()
                    .filter(|p| at_least(p.description.as_ref(), MIN_PARAMETER_DESCRIPTION))
                    .count();

                // Action verb and business noun contribute independently, so
                // one description scores 0, 1, or 2 hits.
                if let Some(description) = &op.description {
                    if lexicon.action_verbs.matches(description) {
                        language_hits += 1;
                    }
                    if lexicon.business_nouns.matches(description) {
                        language_hits += 1;
                    }
                }
            }
        }

        let described_schemas = ctx
            .document
            .components
            .schemas
            .values()
            .filter(|s| at_least(s.description.as_ref(), MIN_SCHEMA_DESCRIPTION))
            .count();

        let description_coverage = coverage(described_ops, op_count);
        let summary_coverage = coverage(summarized_ops, op_count);
        let parameter_descriptions = coverage(described_params, ctx.stats.parameter_count);
        let schema_descriptions = coverage(described_schemas, ctx.stats.schema_count);
        let language_quality = coverage(language_hits, op_count * 2);

        let mut signals = Vec::new();
        if op_count > 0 && described_ops == op_count {
            signals.push(Signal::positive("Every operation has a meaningful description"));
        } else if op_count > 0 {
            signals.push(
                Signal::negative("Operations missing a meaningful description")
                    .with_count(op_count - described_ops),
            );
        }
        if summarized_ops < op_count {
            signals.push(
                Signal::neutral("Operations without a summary").with_count(op_count - summarized_ops),
            );
        }
        if language_quality >= 70 {
            signals.push(Signal::positive(
                "Descriptions name both actions and business objects",
            ));
        }

        let mut tips = Vec::new();
        if description_coverage < 100 {
            tips.push(format!(
                "Describe every operation in at least {MIN_OPERATION_DESCRIPTION} characters: what it does and to which resource"
            ));
        }
        if parameter_descriptions < 100 {
            tips.push("Document what each parameter means and which values are valid".to_string());
        }
        if schema_descriptions < 100 {
            tips.push("Add descriptions to component schemas so agents understand payloads".to_string());
        }

        assemble(
            self.dimension(),
            &[
                ("descriptionCoverage", 0.30, description_coverage),
                ("summaryCoverage", 0.15, summary_coverage),
                ("parameterDescriptions", 0.20, parameter_descriptions),
                ("schemaDescriptions", 0.15, schema_descriptions),
                ("languageQuality", 0.20, language_quality),
            ],
            signals,
            tips,
            false,
        )
    }
}
