/// End-to-end tests for the deprecation-report binary
///
/// These tests write findings to scratch files and run the built binary
/// against them, checking stdout, output files and exit status.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const FINDINGS: &str = r#"[
    {"Name": "b", "Namespace": "ns1", "Kind": "Deployment", "ApiVersion": "extensions/v1beta1",
     "RuleSet": "R2", "ReplaceWith": "apps/v1", "Since": "1.9.0"},
    {"Name": "a", "Namespace": "ns1", "Kind": "Pod", "ApiVersion": "policy/v1beta1",
     "RuleSet": "R1", "ReplaceWith": "policy/v1", "Since": "1.21.0", "Labels": {"team": "x", "env": "prod"}}
]"#;

// Helper to run the binary with a clean labels environment
fn run_report(args: &[&str], env_labels: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deprecation-report"));
    cmd.args(args).env_remove("DEPRECATION_REPORT_SHOW_LABELS");
    if let Some(value) = env_labels {
        cmd.env("DEPRECATION_REPORT_SHOW_LABELS", value);
    }
    cmd.output().unwrap_or_else(|e| panic!("Failed to run deprecation-report {}: {}", args.join(" "), e))
}

// Helper to write the sample findings into `dir`
fn write_findings(dir: &Path) -> String {
    let path = dir.join("findings.json");
    fs::write(&path, FINDINGS).unwrap();
    path.to_str().unwrap().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// Helper to assert the command succeeded
fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_text_report_groups_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_findings(dir.path());

    let output = run_report(&["--input", &input], None);
    assert_success(&output, "text report");

    let out = stdout(&output);
    let r1 = out.find(">>> R1 <<<").expect("R1 banner");
    let r2 = out.find(">>> R2 <<<").expect("R2 banner");
    assert!(r1 < r2);
    assert!(!out.contains("LABELS"));
    assert!(out.contains("(1.21.0) \n"));
}

#[test]
fn test_labels_flag_adds_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_findings(dir.path());

    let output = run_report(&["--input", &input, "--labels"], None);
    assert_success(&output, "labels report");

    let out = stdout(&output);
    assert_eq!(out.lines().filter(|l| l.ends_with("LABELS")).count(), 2);
    assert!(out.contains("env=prod,team=x"));
}

#[test]
fn test_labels_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_findings(dir.path());

    let output = run_report(&["--input", &input], Some("true"));
    assert_success(&output, "labels from env");
    assert!(stdout(&output).contains("LABELS"));
}

#[test]
fn test_malformed_labels_env_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_findings(dir.path());
    let report = dir.path().join("report.txt");

    let output = run_report(&["--input", &input, "--output", report.to_str().unwrap()], Some("maybe"));

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("show-labels"));
    assert!(!report.exists(), "no report should be created when the flag cannot be resolved");
}

#[test]
fn test_output_file_and_rule_set_filter() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_findings(dir.path());
    let report = dir.path().join("report.txt");

    let output = run_report(&["-i", &input, "-o", report.to_str().unwrap(), "--rule-set", "R2"], None);
    assert_success(&output, "file report");

    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("report written to"));
    let written = fs::read_to_string(&report).unwrap();
    assert!(written.contains(">>> R2 <<<"));
    assert!(!written.contains(">>> R1 <<<"));
}

#[test]
fn test_empty_findings_succeed_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "[]").unwrap();

    let output = run_report(&["--input", input.to_str().unwrap()], None);
    assert_success(&output, "empty report");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_findings(dir.path());

    let output = run_report(&["--input", &input, "--format", "json"], None);
    assert_success(&output, "json report");

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = parsed.as_array().unwrap().iter().map(|f| f["Name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let output = run_report(&["--input", missing.to_str().unwrap()], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load findings"));
}
