//! CLI contract tests: help surface, JSON schema, config handling.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("explain_cli").unwrap();
    // keep a stray explain_config.toml in the cwd from leaking in
    cmd.current_dir(std::env::temp_dir());
    cmd
}

fn explain_json(query: &str) -> Value {
    let output = cli()
        .args(["explain", query, "--format", "json"])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("Invalid JSON output")
}

#[test]
fn help_hides_json_alias() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("explain"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("explain-json").not());
}

#[test]
fn sqrt_json_contract() {
    let json = explain_json("sqrt(49)");
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["ok"], true);
    assert_eq!(json["route"], "sqrt");
    assert_eq!(json["input"], "sqrt(49)");
    assert_eq!(json["final_result"], 7.0);
    assert_eq!(json["steps"][0]["index"], 1);
    assert_eq!(json["steps"][0]["title"], "Understand the task");
}

#[test]
fn hidden_alias_matches_explain() {
    let output = cli().args(["explain-json", "12 * 3"]).output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, explain_json("12 * 3"));
    assert_eq!(json["final_result"], 36.0);
}

#[test]
fn division_by_zero_has_no_final_result() {
    let json = explain_json("5 / 0");
    assert_eq!(json["ok"], true);
    assert!(json.get("final_result").is_none());
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.last().unwrap()["title"], "Check division by zero");
    assert!(steps.iter().all(|s| s.get("result").is_none()));
}

#[test]
fn unsupported_characters_are_rejected() {
    let json = explain_json("2 ^^ 3");
    assert_eq!(json["ok"], false);
    assert_eq!(json["route"], "rejected");
    assert_eq!(json["error"]["code"], "E_UNSUPPORTED");
    assert_eq!(json["steps"].as_array().unwrap().len(), 1);
}

#[test]
fn general_query_text_output() {
    cli()
        .args(["explain", "Why is the sky blue?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Structured explanation\n"))
        .stdout(predicate::str::contains("Part 1: Why is the sky blue"))
        .stdout(predicate::str::contains("Result:").not());
}

#[test]
fn text_output_ends_with_result() {
    cli()
        .args(["explain", "(10 + 2) * 5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 + 2 = 12"))
        .stdout(predicate::str::ends_with("Result: 60\n"));
}

#[test]
fn classify_prints_kind_and_normal_form() {
    cli()
        .args(["classify", "square root of 144"])
        .assert()
        .success()
        .stdout("math\nnormalized: sqrt(144)\n");

    cli()
        .args(["classify", "how do tides work"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("general\n"));
}

#[test]
fn config_file_limits_radicand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limits.toml");
    std::fs::write(&path, "max_radicand = 100\nshow_details = false\n").unwrap();

    let output = cli()
        .arg("--config")
        .arg(&path)
        .args(["explain", "sqrt(121)", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"]["code"], "E_INVALID_RADICAND");

    cli()
        .arg("--config")
        .arg(&path)
        .args(["explain", "sqrt(49)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By definition").not())
        .stdout(predicate::str::ends_with("Result: 7\n"));
}

#[test]
fn missing_explicit_config_fails() {
    cli()
        .args(["--config", "/nonexistent/explain.toml", "explain", "1 + 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading config file"));
}

#[test]
fn config_failure_in_json_mode_is_json() {
    let output = cli()
        .args(["--config", "/nonexistent/explain.toml"])
        .args(["explain", "1 + 1", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["code"], "E_INTERNAL");
    assert_eq!(json["input"], "1 + 1");
}
