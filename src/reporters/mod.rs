//! Output reporters for agentgauge results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON (the canonical output contract)
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::AgentReadinessResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a readiness result in the specified format
pub fn report(result: &AgentReadinessResult, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(result, fmt)
}

/// Render a readiness result using an OutputFormat enum
pub fn report_with_format(result: &AgentReadinessResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(result),
        OutputFormat::Json => json::render(result),
        OutputFormat::Markdown => markdown::render(result),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Create a representative result for reporter tests
    pub(crate) fn test_result() -> AgentReadinessResult {
        use crate::config::ScoringConfig;
        use crate::engine::score_document;
        use crate::models::{Severity, ValidationIssue};
        use crate::openapi::parse_document;

        let document = parse_document(
            r#"
openapi: 3.0.3
info:
  title: Orders
  version: '1.0'
paths:
  /orders:
    get:
      operationId: listOrders
      summary: List all orders
      description: Retrieves every order placed by a customer
      parameters:
        - name: limit
          in: query
          description: Maximum rows returned
      responses:
        '200':
          description: ok
        '429':
          description: throttled
"#,
        )
        .expect("fixture parses");

        let issues = vec![ValidationIssue {
            source: "lint".into(),
            code: "style".into(),
            message: "summary should end without a period".into(),
            severity: Severity::Warning,
            path: None,
        }];

        score_document(&document, &issues, &ScoringConfig::default())
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_every_format_renders() {
        let result = test_result();
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            let rendered = report_with_format(&result, format).expect("render");
            assert!(!rendered.is_empty());
        }
    }

    #[test]
    fn test_file_extensions() {
        assert_eq!(file_extension(OutputFormat::Json), "json");
        assert_eq!(file_extension(OutputFormat::Markdown), "md");
    }
}
