//! Score command - ingest, parse, score, report
//!
//! All the plumbing around the engine lives here: reading the spec from a
//! file, stdin, or URL, loading the optional issue list, rendering the
//! result, and the CI fail-under gate. Parse failures are scored (the
//! degraded all-zero result), so the command only errors on I/O problems or
//! the fail-under gate.

use crate::config::load_scoring_config;
use crate::engine::{parse_failure_result, run_scoring_job};
use crate::models::{AgentReadinessResult, ValidationIssue};
use crate::openapi::parse_document;
use crate::reporters;
use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct ScoreArgs {
    pub spec: String,
    pub issues: Option<PathBuf>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub fail_under: Option<u8>,
    pub config_dir: PathBuf,
}

/// Run the score command
pub fn run(args: ScoreArgs) -> Result<()> {
    let text = read_spec(&args.spec)?;
    let issues = load_issues(args.issues.as_deref())?;
    let config = load_scoring_config(&args.config_dir);
    config
        .validate()
        .context("scoring configuration is invalid")?;

    let result = match parse_document(&text) {
        Ok(document) => {
            debug!("parsed document with {} path(s)", document.paths.len());
            run_scoring_job(&document, &issues, &config)
                .context("scoring engine failed; this is a bug, not a property of your spec")?
        }
        Err(e) => {
            info!("document did not parse: {e}");
            parse_failure_result(&e.to_string())
        }
    };

    emit(&result, &args.format, args.output.as_deref())?;

    if let Some(threshold) = args.fail_under {
        if result.overall_score < threshold {
            bail!(
                "overall score {} is below --fail-under threshold {}",
                result.overall_score,
                threshold
            );
        }
    }

    Ok(())
}

/// Read spec text from a file path, stdin (`-`), or an http(s) URL
fn read_spec(spec: &str) -> Result<String> {
    if spec == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read spec from stdin")?;
        return Ok(buffer);
    }

    if spec.starts_with("http://") || spec.starts_with("https://") {
        info!("fetching spec from {spec}");
        let mut response = ureq::get(spec)
            .call()
            .with_context(|| format!("failed to fetch {spec}"))?;
        return response
            .body_mut()
            .read_to_string()
            .with_context(|| format!("failed to read response body from {spec}"));
    }

    std::fs::read_to_string(spec).with_context(|| format!("failed to read {spec}"))
}

/// Load the upstream validator issue list, defaulting to empty
fn load_issues(path: Option<&std::path::Path>) -> Result<Vec<ValidationIssue>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON array of issues", path.display()))
        }
        None => Ok(Vec::new()),
    }
}

fn emit(result: &AgentReadinessResult, format: &str, output: Option<&std::path::Path>) -> Result<()> {
    let rendered = reporters::report(result, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote report to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_issues_defaults_to_empty() {
        assert!(load_issues(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_issues_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.json");
        std::fs::write(
            &path,
            r#"[{"source": "validator", "code": "e1", "message": "boom", "severity": "error"}]"#,
        )
        .unwrap();
        let issues = load_issues(Some(&path)).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "e1");
    }

    #[test]
    fn test_load_issues_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(load_issues(Some(&path)).is_err());
    }

    #[test]
    fn test_read_spec_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.yaml");
        std::fs::write(&path, "openapi: 3.0.3\n").unwrap();
        let text = read_spec(path.to_str().unwrap()).unwrap();
        assert!(text.starts_with("openapi"));
    }
}
