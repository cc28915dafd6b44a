//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They run
//! against the dev data directory (FERIAS_ENV=dev) and stick to read-only
//! commands and deterministic `--from` dates.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "ferias-cli", "--"])
        .args(args)
        .env("FERIAS_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_status() {
    let (stdout, _, code) = run_cli(&["status"]);
    assert_eq!(code, 0, "status failed");

    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout).expect("status output is not JSON");
    assert_eq!(snapshot["type"], "StateSnapshot");
    assert!(snapshot["school_days_left"].is_u64());
    assert!(snapshot["days"].is_u64());
}

#[test]
fn test_watch_once() {
    let (stdout, _, code) = run_cli(&["watch", "--once"]);
    assert_eq!(code, 0, "watch --once failed");
    // Both the counting board and the end view carry the title.
    assert!(stdout.contains("Contagem Regressiva"));
}

#[test]
fn test_watch_once_json() {
    let (stdout, _, code) = run_cli(&["watch", "--once", "--json"]);
    assert_eq!(code, 0, "watch --once --json failed");

    let event: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("watch output is not JSON");
    let kind = event["type"].as_str().unwrap_or_default();
    assert!(kind == "Tick" || kind == "CountdownFinished", "got {kind}");
}

#[test]
fn test_days_from_fixed_date() {
    // Thu Dec 18 + Fri Dec 19, no closures in range.
    let (stdout, _, code) = run_cli(&["days", "--from", "2025-12-18"]);
    assert_eq!(code, 0, "days failed");
    assert!(stdout.contains("02 Dias Letivos"));
}

#[test]
fn test_days_past_last_day_is_zero() {
    let (stdout, _, code) = run_cli(&["days", "--from", "2025-12-22", "--json"]);
    assert_eq!(code, 0, "days --json failed");

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("days output is not JSON");
    assert_eq!(report["school_days_left"], 0);
    assert_eq!(report["last_day"], "2025-12-19");
}

#[test]
fn test_days_from_closure_date() {
    // Thu Nov 20 and Fri Nov 21 are default closures, so counting starts
    // paying out at Mon Nov 24: four full weeks remain through Dec 19.
    let (stdout, _, code) = run_cli(&["days", "--from", "2025-11-20", "--json"]);
    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("days output is not JSON");
    assert_eq!(report["from"], "2025-11-20");
    assert_eq!(report["school_days_left"], 20);
}

#[test]
fn test_days_rejects_bad_date() {
    let (_, stderr, code) = run_cli(&["days", "--from", "18/12/2025"]);
    assert_ne!(code, 0, "bad date unexpectedly accepted");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_show() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("[countdown]"));
    assert!(stdout.contains("[school]"));
}

#[test]
fn test_config_path() {
    let (stdout, _, code) = run_cli(&["config", "path"]);
    assert_eq!(code, 0, "config path failed");
    assert!(stdout.contains("config.toml"));
}

#[test]
fn test_config_set_target_rejects_bad_literal() {
    let (_, stderr, code) = run_cli(&["config", "set-target", "tomorrow"]);
    assert_ne!(code, 0, "bad target unexpectedly accepted");
    assert!(stderr.contains("countdown.target"));
}
