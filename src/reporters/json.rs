//! JSON reporter
//!
//! Outputs the full AgentReadinessResult as pretty-printed JSON. This is the
//! canonical output contract: stable field names, deterministic map order,
//! byte-identical for identical inputs.

use crate::models::AgentReadinessResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &AgentReadinessResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render result as compact JSON (single line)
pub fn render_compact(result: &AgentReadinessResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}
