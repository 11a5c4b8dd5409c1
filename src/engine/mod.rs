//! Scoring engine orchestration
//!
//! Raw inputs flow strictly one way: document -> stats extractor -> six
//! analyzers (independent, evaluated in parallel) -> composite aggregator ->
//! recommendation generator -> assembled result. There is no feedback loop
//! and no shared mutable state; the same inputs always produce byte-identical
//! output.

pub mod aggregate;
pub mod recommend;
pub mod stats;
pub mod worker;

use crate::analyzers::{all_analyzers, AnalysisContext};
use crate::config::ScoringConfig;
use crate::models::{
    AgentReadinessResult, Dimension, DimensionScore, DocumentStats, Grade, ReadinessLevel, Signal,
};
use crate::openapi::OpenApiDocument;
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;
use tracing::debug;

/// An infrastructure failure inside the engine, as opposed to a scored
/// outcome. "Your spec is bad" and "our scorer has a bug" never share a
/// representation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("scoring engine panicked: {0}")]
    Panicked(String),
}

/// Score a parsed document against externally produced validation issues.
///
/// Pure and synchronous: no I/O, no wall clock, no randomness. The analyzers
/// have no data dependency on one another and run on the rayon pool; the
/// order-preserving collect keeps the output identical to sequential
/// evaluation.
pub fn score_document(
    document: &OpenApiDocument,
    issues: &[crate::models::ValidationIssue],
    config: &ScoringConfig,
) -> AgentReadinessResult {
    let stats = stats::extract_stats(document);
    let ctx = AnalysisContext {
        document,
        stats: &stats,
        issues,
        config,
    };

    let analyzers = all_analyzers();
    let dimensions: Vec<DimensionScore> =
        analyzers.par_iter().map(|a| a.analyze(&ctx)).collect();

    for d in &dimensions {
        debug!("{}: {} ({})", d.label, d.score, d.grade);
    }

    let composite = aggregate::aggregate(&dimensions, &stats, config);
    let recommendations = recommend::generate(&dimensions, config);

    AgentReadinessResult {
        overall_score: composite.overall_score,
        grade: composite.grade,
        readiness_level: composite.readiness_level,
        summary: composite.summary,
        dimensions,
        stats,
        recommendations,
    }
}

/// Degraded-but-valid result for input that did not parse at all.
///
/// This is a normal, scored outcome: every dimension reports 0/F with one
/// negative signal carrying the parse failure, and exactly one critical
/// recommendation is emitted. It is the only branch that bypasses the six
/// analyzers.
pub fn parse_failure_result(reason: &str) -> AgentReadinessResult {
    let dimensions = Dimension::ALL
        .iter()
        .map(|&dimension| DimensionScore {
            dimension,
            score: 0,
            grade: Grade::F,
            label: dimension.label().to_string(),
            description: dimension.description().to_string(),
            signals: vec![Signal::negative(format!(
                "Document could not be parsed: {reason}"
            ))],
            sub_factors: Default::default(),
            improvement_tips: Vec::new(),
            external_tool_can_help: matches!(
                dimension,
                Dimension::FoundationalCompliance | Dimension::AiDiscoverability
            ),
        })
        .collect();

    AgentReadinessResult {
        overall_score: 0,
        grade: Grade::F,
        readiness_level: ReadinessLevel::NotReady,
        summary: format!(
            "This document could not be parsed as an OpenAPI specification ({reason}). \
             0 operation(s) were analyzed; fix the syntax and score it again."
        ),
        dimensions,
        stats: DocumentStats::default(),
        recommendations: vec![recommend::parse_failure_recommendation()],
    }
}

/// Run one scoring job as an isolated unit of work.
///
/// A panic inside an analyzer (a malformed-but-technically-parsed document
/// hitting a bug) is caught and surfaced as [`EngineError::Panicked`] rather
/// than a score of 0. Retrying is pointless: the computation is
/// deterministic, so a failure reproduces.
pub fn run_scoring_job(
    document: &OpenApiDocument,
    issues: &[crate::models::ValidationIssue],
    config: &ScoringConfig,
) -> Result<AgentReadinessResult, EngineError> {
    catch_unwind(AssertUnwindSafe(|| score_document(document, issues, config)))
        .map_err(|payload| EngineError::Panicked(panic_message(payload)))
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
