//! Core data models for agentgauge
//!
//! These models are used throughout the codebase for representing
//! validation issues, dimension scores, and the final readiness result.
//! All result types serialize with camelCase field names so the JSON
//! output matches the published contract (`overallScore`, `subFactors`, ...),
//! and maps are `BTreeMap` so serialization order is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity of an externally produced validation issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    #[default]
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// An issue reported by an upstream structural validator.
///
/// The engine treats `source` and `code` opaquely: only `severity` is
/// interpreted, plus substring matching on `message`/`code`/`path` to
/// classify issues as reference- or schema-related.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationIssue {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

/// Aggregate statistics extracted from the document in one walk.
///
/// Recomputed per scoring run, never persisted. Every analyzer divides by
/// these counts and treats zero as "no data", never as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub operation_count: usize,
    pub schema_count: usize,
    pub parameter_count: usize,
    pub tag_count: usize,
    pub security_scheme_count: usize,
}

/// Kind of a human-readable observation backing a dimension score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Positive,
    Negative,
    Neutral,
}

/// A short human-readable observation attached to a dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Signal {
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Positive,
            message: message.into(),
            count: None,
        }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Negative,
            message: message.into(),
            count: None,
        }
    }

    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Neutral,
            message: message.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Letter grade, shared by dimensions and the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Monotonic step function: >=90 A, >=80 B, >=70 C, >=60 D, else F
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Coarse four-tier readiness label derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "Agent Ready")]
    AgentReady,
    #[serde(rename = "Partially Ready")]
    PartiallyReady,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl ReadinessLevel {
    /// Step function: >=80 Agent Ready, >=60 Partially Ready, >=40 Needs Work
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => ReadinessLevel::AgentReady,
            60..=79 => ReadinessLevel::PartiallyReady,
            40..=59 => ReadinessLevel::NeedsWork,
            _ => ReadinessLevel::NotReady,
        }
    }
}

impl std::fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadinessLevel::AgentReady => write!(f, "Agent Ready"),
            ReadinessLevel::PartiallyReady => write!(f, "Partially Ready"),
            ReadinessLevel::NeedsWork => write!(f, "Needs Work"),
            ReadinessLevel::NotReady => write!(f, "Not Ready"),
        }
    }
}

/// The six scored dimensions, in declaration (weight) order.
///
/// Declaration order is load-bearing: the composite weight table, the
/// dimension list in the result, and recommendation tie-breaking all follow
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    FoundationalCompliance,
    SemanticRichness,
    AgentUsability,
    AiDiscoverability,
    Security,
    ErrorRecoverability,
}

impl Dimension {
    /// All six dimensions in declaration order
    pub const ALL: [Dimension; 6] = [
        Dimension::FoundationalCompliance,
        Dimension::SemanticRichness,
        Dimension::AgentUsability,
        Dimension::AiDiscoverability,
        Dimension::Security,
        Dimension::ErrorRecoverability,
    ];

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::FoundationalCompliance => "Foundational Compliance",
            Dimension::SemanticRichness => "Semantic Richness",
            Dimension::AgentUsability => "Agent Usability",
            Dimension::AiDiscoverability => "AI Discoverability",
            Dimension::Security => "Security",
            Dimension::ErrorRecoverability => "Error Recoverability",
        }
    }

    /// One-line description of what the dimension measures
    pub fn description(&self) -> &'static str {
        match self {
            Dimension::FoundationalCompliance => {
                "Structural validity: parse cleanliness, lint results, reference resolution"
            }
            Dimension::SemanticRichness => {
                "How well operations, parameters, and schemas are described in natural language"
            }
            Dimension::AgentUsability => {
                "Operation identifiers, idempotency, error responses, and pagination conventions"
            }
            Dimension::AiDiscoverability => {
                "Examples, tags, and API-level metadata that help an agent orient itself"
            }
            Dimension::Security => "Declared security schemes, operation coverage, and HTTPS",
            Dimension::ErrorRecoverability => {
                "Structured error responses with recognizable error-code and retry fields"
            }
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score for one dimension.
///
/// Invariant: `score` is the rounded weighted blend of `sub_factors`, each of
/// which is already clamped to [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: u8,
    pub grade: Grade,
    pub label: String,
    pub description: String,
    pub signals: Vec<Signal>,
    pub sub_factors: BTreeMap<String, u8>,
    pub improvement_tips: Vec<String>,
    pub external_tool_can_help: bool,
}

/// Priority of a recommendation.
///
/// Variant order is the sort order (critical first); ties in a stable sort
/// preserve dimension declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// One actionable improvement derived from a weak dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub dimension: Dimension,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub automatable: bool,
}

/// Root aggregate returned by one scoring run.
///
/// Created fresh per invocation; the whole lifecycle is compute, return,
/// discard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentReadinessResult {
    pub overall_score: u8,
    pub grade: Grade,
    pub readiness_level: ReadinessLevel,
    pub summary: String,
    pub dimensions: Vec<DimensionScore>,
    pub stats: DocumentStats,
    pub recommendations: Vec<Recommendation>,
}

impl AgentReadinessResult {
    /// Look up a dimension score by dimension
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}
