//! End-to-end tests for the nflverse-types binary

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a Command for the nflverse-types binary
#[allow(deprecated)]
fn nflverse() -> Command {
    let mut cmd = Command::cargo_bin("nflverse-types").expect("Failed to find nflverse-types binary");
    cmd.env_remove("NFLVERSE_SEASON_TYPE");
    cmd
}

// ============================================================================
// listing commands
// ============================================================================

#[test]
fn test_teams_lists_all_codes() {
    let output = nflverse().arg("teams").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 35);
    assert!(stdout.contains("Kansas City Chiefs"));
    assert!(stdout.contains("(now LAC)"));
}

#[test]
fn test_teams_historical_only() {
    nflverse()
        .args(["teams", "--historical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STL"))
        .stdout(predicate::str::contains("BUF").not());
}

#[test]
fn test_teams_flags_conflict() {
    nflverse()
        .args(["teams", "--current", "--historical"])
        .assert()
        .failure();
}

#[test]
fn test_teams_json() {
    let output = nflverse()
        .args(["teams", "--current", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 32);
    assert_eq!(rows[0]["code"], "BUF");
    assert_eq!(rows[31]["code"], "SEA");
}

#[test]
fn test_positions_group_filter() {
    nflverse()
        .args(["positions", "--group", "special-teams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Long Snapper"))
        .stdout(predicate::str::contains("Quarterback").not());
}

#[test]
fn test_season_types_output() {
    nflverse()
        .arg("season-types")
        .assert()
        .success()
        .stdout(predicate::str::contains("REG"))
        .stdout(predicate::str::contains("weeks 19-22"));
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_regular_season_week() {
    nflverse()
        .args(["check", "week", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid week: 5 (REG)"));
}

#[test]
fn test_check_week_outside_phase_fails() {
    nflverse()
        .args(["check", "week", "20", "--season-type", "REG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the REG range 1-18"));
}

#[test]
fn test_check_week_uses_env_season_type() {
    nflverse()
        .env("NFLVERSE_SEASON_TYPE", "POST")
        .args(["check", "week", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Divisional"));
}

#[test]
fn test_check_historical_team() {
    nflverse()
        .args(["check", "team", "OAK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("historical code, now LV"));
}

#[test]
fn test_check_unknown_team_fails() {
    nflverse()
        .args(["check", "team", "XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid team code"));
}

#[test]
fn test_check_invalid_season_type_flag() {
    nflverse()
        .args(["check", "week", "5", "--season-type", "reg"])
        .assert()
        .failure();
}

#[test]
fn test_check_week_too_large_reports_range() {
    nflverse()
        .args(["check", "week", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weeks run 1-22"));
}
