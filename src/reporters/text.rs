//! Text (terminal) reporter with colors and formatting

use crate::models::{AgentReadinessResult, Grade, Priority, SignalKind};
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "\x1b[32m",  // Green
        Grade::B => "\x1b[92m",  // Light green
        Grade::C => "\x1b[33m",  // Yellow
        Grade::D => "\x1b[91m",  // Light red
        Grade::F => "\x1b[31m",  // Red
    }
}

/// Priority colors
fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "\x1b[31m", // Red
        Priority::High => "\x1b[91m",     // Light red
        Priority::Medium => "\x1b[33m",   // Yellow
        Priority::Low => "\x1b[34m",      // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Signal markers
fn signal_marker(kind: SignalKind) -> &'static str {
    match kind {
        SignalKind::Positive => "\x1b[32m+\x1b[0m",
        SignalKind::Negative => "\x1b[31m-\x1b[0m",
        SignalKind::Neutral => "\x1b[90m·\x1b[0m",
    }
}

/// Render result as formatted terminal output
pub fn render(result: &AgentReadinessResult) -> Result<String> {
    let mut out = String::new();

    // Header
    let grade_c = grade_color(result.grade);
    out.push_str(&format!("\n{BOLD}Agent Readiness{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  Level: {BOLD}{}{RESET}\n",
        result.overall_score, result.grade, result.readiness_level
    ));
    out.push_str(&format!(
        "Operations: {}  Schemas: {}  Parameters: {}  Security schemes: {}\n\n",
        result.stats.operation_count,
        result.stats.schema_count,
        result.stats.parameter_count,
        result.stats.security_scheme_count
    ));

    // Dimension scores
    out.push_str(&format!("{BOLD}DIMENSIONS{RESET}\n"));
    for dimension in &result.dimensions {
        let color = grade_color(dimension.grade);
        out.push_str(&format!(
            "  {color}{}{RESET} {:<24} {:>3}/100\n",
            dimension.grade, dimension.label, dimension.score
        ));
        for signal in &dimension.signals {
            let count = signal
                .count
                .map(|c| format!(" ({c})"))
                .unwrap_or_default();
            out.push_str(&format!(
                "      {} {}{count}\n",
                signal_marker(signal.kind),
                signal.message
            ));
        }
    }
    out.push('\n');

    // Recommendations
    if result.recommendations.is_empty() {
        out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET} none — ship it\n"));
    } else {
        out.push_str(&format!(
            "{BOLD}RECOMMENDATIONS{RESET} ({})\n",
            result.recommendations.len()
        ));
        for rec in &result.recommendations {
            let color = priority_color(rec.priority);
            out.push_str(&format!(
                "  {color}[{}]{RESET} {BOLD}{}{RESET}\n      {}\n",
                rec.priority, rec.title, rec.description
            ));
        }
    }

    out.push_str(&format!("\n{DIM}{}{RESET}\n", result.summary));

    Ok(out)
}
