//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway config directory.

use std::process::Command;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli_in(dir: &std::path::Path, args: &[&str]) -> (i32, String, String) {
    run_cli_with_log(dir, None, args)
}

fn run_cli_with_log(
    dir: &std::path::Path,
    rust_log: Option<&str>,
    args: &[&str],
) -> (i32, String, String) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stillpoint"));
    cmd.args(args).env("STILLPOINT_CONFIG_DIR", dir);
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    let output = cmd.output().expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let dir = tempfile::tempdir().unwrap();
    run_cli_in(dir.path(), args)
}

#[test]
fn test_phases_table() {
    let (code, stdout, _) = run_cli(&["phases"]);
    assert_eq!(code, 0, "phases failed");
    assert!(stdout.contains("Inhale   4s  Inhale slowly..."));
    assert!(stdout.contains("Exhale   6s  Exhale gently..."));
    assert!(stdout.contains("cycle   16s"));
}

#[test]
fn test_phases_json() {
    let (code, stdout, _) = run_cli(&["phases", "--json"]);
    assert_eq!(code, 0, "phases --json failed");
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2]["phase"], "exhale");
    assert_eq!(rows[3]["duration_secs"], 2);
}

#[test]
fn test_guides_list_json() {
    let (code, stdout, _) = run_cli(&["guides", "list", "--json"]);
    assert_eq!(code, 0, "guides list failed");
    let guides: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(guides.as_array().unwrap().len(), 6);
    assert_eq!(guides[0]["title"], "Breath Awareness");
}

#[test]
fn test_guides_show() {
    let (code, stdout, _) = run_cli(&["guides", "show", "body scan"]);
    assert_eq!(code, 0, "guides show failed");
    assert!(stdout.contains("Body Scan (10 min)"));
}

#[test]
fn test_guides_show_unknown() {
    let (code, _, stderr) = run_cli(&["guides", "show", "Mantra"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Unknown meditation guide: Mantra"));
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run_cli_in(dir.path(), &["config", "get", "breathing.cycles"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0");

    let (code, stdout, _) = run_cli_in(dir.path(), &["config", "set", "breathing.cycles", "3"]);
    assert_eq!(code, 0, "config set failed");
    assert_eq!(stdout.trim(), "ok");

    let (_, stdout, _) = run_cli_in(dir.path(), &["config", "get", "breathing.cycles"]);
    assert_eq!(stdout.trim(), "3");
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_unknown_key() {
    let (code, _, stderr) = run_cli(&["config", "get", "breathing.pace"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key: breathing.pace"));

    let (code, _, stderr) = run_cli(&["config", "set", "breathing.pace", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_breathe_one_cycle_text() {
    let (code, stdout, _) = run_cli(&["breathe", "--cycles", "1", "--tick-ms", "20"]);
    assert_eq!(code, 0, "breathe failed");
    let first = stdout.lines().next().unwrap();
    assert_eq!(first, "Inhale   4  Inhale slowly...");
    assert!(stdout.contains("(1 cycles completed)"));
}

#[test]
fn test_breathe_one_cycle_json() {
    let (code, stdout, _) = run_cli(&["breathe", "--cycles", "1", "--tick-ms", "20", "--json"]);
    assert_eq!(code, 0, "breathe --json failed");
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["type"], "BreathingSnapshot");
    assert_eq!(last["running"], false);
    assert_eq!(last["button_label"], "Start Breathing Exercise");
    assert!(last["cycles_completed"].as_u64().unwrap() >= 1);
}

#[test]
fn test_breathe_uses_config_cycles() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli_in(dir.path(), &["config", "set", "breathing.show_instructions", "false"]);
    assert_eq!(code, 0);
    run_cli_in(dir.path(), &["config", "set", "breathing.cycles", "1"]);

    let (code, stdout, _) = run_cli_in(dir.path(), &["breathe", "--tick-ms", "10"]);
    assert_eq!(code, 0, "breathe failed");
    assert_eq!(stdout.lines().next().unwrap(), "Inhale   4");
    assert!(stdout.contains("cycles completed)"));
}

#[test]
fn test_malformed_config_warns_and_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[breathing]\ncycles = \"many\"\n").unwrap();

    let (code, stdout, stderr) =
        run_cli_with_log(dir.path(), Some("warn"), &["breathe", "--cycles", "1", "--tick-ms", "1"]);
    assert_eq!(code, 0, "breathe failed: {stderr}");
    assert!(stderr.contains("falling back to default config"), "stderr: {stderr}");
    assert!(stdout.contains("(1 cycles completed)"));

    // The default `logging.level` is warn, so the warning shows without RUST_LOG too.
    let (code, _, stderr) = run_cli_in(dir.path(), &["phases"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("falling back to default config"), "stderr: {stderr}");
}

#[test]
fn test_meditate_custom_minutes() {
    let (code, stdout, _) = run_cli(&["meditate", "--minutes", "1", "--tick-ms", "2"]);
    assert_eq!(code, 0, "meditate failed");
    assert!(stdout.starts_with("Meditation Timer  0"));
    assert!(stdout.contains("Meditation Timer  00:00"));
    assert!(stdout.contains("Session complete: Meditation Timer"));
}

#[test]
fn test_meditate_unknown_guide() {
    let (code, _, stderr) = run_cli(&["meditate", "--guide", "Mantra"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown meditation guide"));
}

#[test]
fn test_streak_counts_back_from_today() {
    let (code, stdout, _) = run_cli(&[
        "streak",
        "2026-10-17",
        "2026-10-18",
        "2026-10-18",
        "2026-10-15",
        "--today",
        "2026-10-19",
    ]);
    assert_eq!(code, 0, "streak failed");
    assert_eq!(stdout.trim(), "2-day streak");
}

#[test]
fn test_streak_json() {
    let (code, stdout, _) = run_cli(&["streak", "2026-10-19", "--today", "2026-10-19", "--json"]);
    assert_eq!(code, 0, "streak --json failed");
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["streak_days"], 1);
    assert_eq!(report["window_days"], 30);
    assert_eq!(report["today"], "2026-10-19");
}

#[test]
fn test_streak_rejects_bad_date() {
    let (code, _, _) = run_cli(&["streak", "yesterday"]);
    assert_eq!(code, 2);
}

#[test]
fn test_completions() {
    let (code, stdout, _) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("stillpoint"));
}
