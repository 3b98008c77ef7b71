use std::{fs, process::Command};

const BINARY: &str = env!("CARGO_BIN_EXE_elo-change");

fn reference_command() -> Command {
    elo_command("50")
}

fn elo_command(player_level: &str) -> Command {
    let mut command = Command::new(BINARY);
    command
        .args([
            "--average-level",
            "25",
            "--player-level",
            player_level,
            "--place-finished",
            "88",
            "--kills",
            "1",
            "--downs",
            "2",
            "--assists",
            "7",
            "--accuracy",
            "0.25",
            "--time-survived",
            "3",
            "--game-length",
            "25"
        ])
        .env("RUST_LOG", "warn")
        .env_remove("ELO_LOG_LEVEL")
        .env_remove("ELO_CONSTANTS");

    command
}

/// The binary prints the full report as JSON on stdout
#[test]
fn test_prints_report() {
    let output = reference_command().output().expect("Failed to execute elo-change");

    assert!(output.status.success(), "Process should succeed for valid input");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).expect("Expected JSON report on stdout");

    for key in ["lost", "won_stayed", "won_left", "won_lived"] {
        assert!(report.get(key).is_some(), "Report should contain {}", key);
    }

    let lost = report["lost"]["score"].as_f64().unwrap();
    assert!((lost - -85.925).abs() < 1e-9);
}

/// Selecting one outcome prints just that change
#[test]
fn test_prints_single_outcome() {
    let output = reference_command()
        .args(["--outcome", "won_lived"])
        .output()
        .expect("Failed to execute elo-change");

    assert!(output.status.success());

    let change: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("Expected JSON on stdout");
    assert!((change["score"].as_f64().unwrap() - 121.675).abs() < 1e-9);
    assert!((change["score_with_bonus"].as_f64().unwrap() - 109.175).abs() < 1e-9);
}

#[test]
fn test_exits_on_unknown_outcome() {
    let output = reference_command()
        .args(["--outcome", "draw"])
        .output()
        .expect("Failed to execute elo-change");

    // Rejected while parsing arguments, before any scoring
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'draw'"));
    assert!(stderr.contains("won_lived"));
}

#[test]
fn test_help_lists_outcomes() {
    let output = Command::new(BINARY).arg("--help").output().expect("Failed to execute elo-change");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["lost", "won_stayed", "won_left", "won_lived"] {
        assert!(stdout.contains(name), "Help should list {}", name);
    }
}

/// RUST_LOG may carry any filter directive, not only a bare level
#[test]
fn test_accepts_rust_log_directive() {
    let output = reference_command()
        .env("RUST_LOG", "elo_change=debug")
        .output()
        .expect("Failed to execute elo-change");

    assert!(output.status.success(), "Process should start with a RUST_LOG directive");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Computed elo change"));
}

#[test]
fn test_log_level_flag_overrides_rust_log() {
    let output = reference_command()
        .env("RUST_LOG", "elo_change=debug")
        .args(["--log-level", "error"])
        .output()
        .expect("Failed to execute elo-change");

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Computed elo change"));
}

/// A zero game length must fail instead of printing non-finite scores
#[test]
fn test_exits_on_zero_game_length() {
    let output = Command::new(BINARY)
        .args([
            "--average-level",
            "25",
            "--player-level",
            "50",
            "--place-finished",
            "1",
            "--accuracy",
            "0.5",
            "--time-survived",
            "0",
            "--game-length",
            "0"
        ])
        .env("RUST_LOG", "warn")
        .env_remove("ELO_LOG_LEVEL")
        .output()
        .expect("Failed to execute elo-change");

    assert!(!output.status.success(), "Process should fail with zero game length");
    assert!(output.stdout.is_empty(), "No partial report should be printed");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("game_length must not be zero"));
}

#[test]
fn test_constants_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!("elo-change-constants-{}.json", std::process::id()));
    fs::write(&path, r#"{ "victory_bonus": 200.0 }"#).unwrap();

    let output = reference_command()
        .arg("--constants")
        .arg(&path)
        .args(["--outcome", "won_lived"])
        .output()
        .expect("Failed to execute elo-change");

    fs::remove_file(&path).ok();
    assert!(output.status.success());

    let change: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("Expected JSON on stdout");
    assert!((change["score"].as_f64().unwrap() - 221.675).abs() < 1e-9);
}

#[test]
fn test_exits_on_missing_constants_file() {
    let output = reference_command()
        .args(["--constants", "/nonexistent/elo-constants.json"])
        .output()
        .expect("Failed to execute elo-change");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read constants file"));
}

#[test]
fn test_strict_mode_enforces_level_cap() {
    let output = elo_command("150")
        .arg("--strict")
        .output()
        .expect("Failed to execute elo-change");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("player_level must be within"));
}
