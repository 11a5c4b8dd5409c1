//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments
//! - CI job summaries
//! - Checked-in documentation

use crate::models::AgentReadinessResult;
use anyhow::Result;

/// Render result as GitHub-flavored Markdown
pub fn render(result: &AgentReadinessResult) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Agent Readiness Report\n\n");
    out.push_str(&format!(
        "**Score:** {}/100 (grade {}) — **{}**\n\n",
        result.overall_score, result.grade, result.readiness_level
    ));
    out.push_str(&format!("{}\n\n", result.summary));

    out.push_str("## Dimensions\n\n");
    out.push_str("| Dimension | Score | Grade | Key signals |\n");
    out.push_str("|-----------|------:|:-----:|-------------|\n");
    for dimension in &result.dimensions {
        let signals = dimension
            .signals
            .iter()
            .map(|s| match s.count {
                Some(count) => format!("{} ({count})", s.message),
                None => s.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            dimension.label, dimension.score, dimension.grade, signals
        ));
    }
    out.push('\n');

    if !result.recommendations.is_empty() {
        out.push_str("## Recommendations\n\n");
        out.push_str("| Priority | Recommendation | Impact |\n");
        out.push_str("|----------|----------------|--------|\n");
        for rec in &result.recommendations {
            out.push_str(&format!(
                "| {} | **{}** — {} | {} |\n",
                rec.priority, rec.title, rec.description, rec.impact
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "_{} operation(s), {} schema(s), {} parameter(s), {} tag(s), {} security scheme(s)._\n",
        result.stats.operation_count,
        result.stats.schema_count,
        result.stats.parameter_count,
        result.stats.tag_count,
        result.stats.security_scheme_count
    ));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_markdown_has_dimension_table() {
        let result = test_result();
        let rendered = render(&result).expect("render markdown");
        assert!(rendered.starts_with("# Agent Readiness Report"));
        assert!(rendered.contains("| Dimension | Score | Grade |"));
        for dimension in &result.dimensions {
            assert!(rendered.contains(&dimension.label));
        }
    }

    #[test]
    fn test_markdown_omits_empty_recommendation_table() {
        let mut result = test_result();
        result.recommendations.clear();
        let rendered = render(&result).expect("render markdown");
        assert!(!rendered.contains("## Recommendations"));
    }
}
