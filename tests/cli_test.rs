//! End-to-end tests for the agentgauge binary

use std::path::Path;
use std::process::{Command, Output};

fn agentgauge(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_agentgauge"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("binary should run")
}

fn write_fixture(dir: &Path) -> String {
    let path = dir.join("api.yaml");
    std::fs::write(
        &path,
        r#"openapi: 3.0.3
info:
  title: Users
  version: '1.0'
paths:
  /users:
    get:
      operationId: listUsers
      description: Retrieves user records quickly
      parameters:
        - name: limit
          in: query
          description: Maximum rows returned
      responses:
        '200':
          description: ok
          content:
            application/json:
              example:
                - id: 1
"#,
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_score_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_fixture(dir.path());

    let output = agentgauge(&["score", &spec, "--format", "json"], dir.path());
    assert!(output.status.success(), "{:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["overallScore"], 62);
    assert_eq!(json["grade"], "D");
    assert_eq!(json["readinessLevel"], "Partially Ready");
    assert_eq!(json["dimensions"].as_array().unwrap().len(), 6);
    assert_eq!(json["dimensions"][0]["dimension"], "foundationalCompliance");
    assert_eq!(json["dimensions"][0]["score"], 100);
}

#[test]
fn test_score_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_fixture(dir.path());

    let output = agentgauge(&["score", &spec], dir.path());
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Agent Readiness"));
    assert!(text.contains("62"));
}

#[test]
fn test_score_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_fixture(dir.path());
    let report = dir.path().join("report.md");

    let output = agentgauge(
        &[
            "score",
            &spec,
            "--format",
            "markdown",
            "--output",
            report.to_str().unwrap(),
        ],
        dir.path(),
    );
    assert!(output.status.success());
    let rendered = std::fs::read_to_string(&report).unwrap();
    assert!(rendered.contains("# Agent Readiness Report"));
}

#[test]
fn test_fail_under_gate() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_fixture(dir.path());

    // Score is 62: passes at 60, fails at 80
    let pass = agentgauge(&["score", &spec, "--fail-under", "60"], dir.path());
    assert!(pass.status.success());

    let fail = agentgauge(&["score", &spec, "--fail-under", "80"], dir.path());
    assert!(!fail.status.success());
    let stderr = String::from_utf8_lossy(&fail.stderr);
    assert!(stderr.contains("below --fail-under threshold"));
}

#[test]
fn test_unparseable_spec_still_produces_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "{{{ not a spec").unwrap();

    let output = agentgauge(
        &["score", path.to_str().unwrap(), "--format", "json"],
        dir.path(),
    );
    assert!(output.status.success(), "parse failures score, not error");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["overallScore"], 0);
    assert_eq!(json["readinessLevel"], "Not Ready");
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 1);
    assert_eq!(json["recommendations"][0]["priority"], "critical");
}

#[test]
fn test_score_with_issues_file() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_fixture(dir.path());
    let issues = dir.path().join("issues.json");
    std::fs::write(
        &issues,
        r#"[{"source": "spectral", "code": "oas3-schema", "message": "invalid schema", "severity": "error"}]"#,
    )
    .unwrap();

    let output = agentgauge(
        &[
            "score",
            &spec,
            "--issues",
            issues.to_str().unwrap(),
            "--format",
            "json",
        ],
        dir.path(),
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // One error: validity 88, lint 92, structure 99 -> compliance drops below 100
    assert!(json["dimensions"][0]["score"].as_u64().unwrap() < 100);
}

#[test]
fn test_init_then_score_uses_config() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_fixture(dir.path());

    let init = agentgauge(&["init"], dir.path());
    assert!(init.status.success());
    assert!(dir.path().join("agentgauge.toml").exists());

    // Scoring with the freshly written default config matches the built-ins
    let output = agentgauge(&["score", &spec, "--format", "json"], dir.path());
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["overallScore"], 62);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = agentgauge(&["score", "no-such-file.yaml"], dir.path());
    assert!(!output.status.success());
}
