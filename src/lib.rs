//! agentgauge - agent-readiness scoring for OpenAPI documents
//!
//! The core is a pure, deterministic scoring engine: six independent
//! dimension analyzers walk a parsed OpenAPI document plus an externally
//! produced validation-issue list, and their scores combine into a weighted
//! composite with explainable signals and prioritized recommendations.
//!
//! ```no_run
//! use agentgauge::config::ScoringConfig;
//! use agentgauge::engine::score_document;
//! use agentgauge::openapi::parse_document;
//!
//! let doc = parse_document("openapi: 3.0.3\n").unwrap();
//! let result = score_document(&doc, &[], &ScoringConfig::default());
//! println!("{}/100", result.overall_score);
//! ```

pub mod analyzers;
pub mod classify;
pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod openapi;
pub mod reporters;

pub use engine::{parse_failure_result, run_scoring_job, score_document, EngineError};
pub use models::{AgentReadinessResult, Dimension, DimensionScore, Recommendation, ValidationIssue};
