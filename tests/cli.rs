mod common;

use std::fs;

use predicates::prelude::*;
use serde_json::Value;

use common::{robot_json, tenk};

#[test]
fn test_cli_help() {
    let (mut cmd, _home) = tenk();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn test_cli_version() {
    let (mut cmd, _home) = tenk();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tier_robot_mid_amateur() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.args(["--robot", "tier", "2450"]));

    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["tier"]["name"], "Amateur");
    assert_eq!(json["data"]["next_tier"]["name"], "Master");
    assert_eq!(json["data"]["hours_to_next"], 550.0);
    let progress = json["data"]["progress_percent"].as_f64().unwrap();
    assert!((progress - 24.5).abs() < 1e-9);
}

#[test]
fn test_tier_robot_legend_has_no_next() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.args(["--robot", "tier", "12000"]));

    assert_eq!(json["data"]["tier"]["name"], "Legend");
    assert_eq!(json["data"]["tier"]["accent"], "gold");
    assert_eq!(json["data"]["next_tier"], Value::Null);
    assert_eq!(json["data"]["hours_to_next"], Value::Null);
    assert_eq!(json["data"]["progress_percent"], 100.0);
}

#[test]
fn test_tier_plain_is_tab_separated() {
    let (mut cmd, _home) = tenk();
    cmd.args(["--output-format", "plain", "tier", "999"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Novice\t10.0\tAmateur\t1\n"));
}

#[test]
fn test_tier_rejects_negative_hours() {
    let (mut cmd, _home) = tenk();
    let output = cmd.args(["--robot", "tier", "-5"]).output().unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], true);
    assert_eq!(json["code"], "validation_failed");
}

#[test]
fn test_levels_lists_every_tier() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.args(["--robot", "levels"]));

    assert_eq!(json["data"]["mastery_hours"], 10000.0);
    let names: Vec<&str> = json["data"]["levels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|level| level["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Novice", "Amateur", "Master", "Pro", "Legend"]);
}

#[test]
fn test_levels_human_output() {
    let (mut cmd, _home) = tenk();
    cmd.arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("Legend"))
        .stdout(predicate::str::contains("10,000"));
}

#[test]
fn test_report_demo_session() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.args(["--robot", "report", "--demo"]));

    let skills = json["data"]["skills"].as_array().unwrap();
    assert_eq!(skills.len(), 3);
    assert_eq!(skills[0]["name"], "Programming");
    assert_eq!(skills[0]["hours"], 2450.0);
    assert_eq!(skills[0]["icon"], "code");
    assert_eq!(skills[2]["tier"]["name"], "Master");
    assert_eq!(json["data"]["summary"]["total_hours"], 7430.0);
    assert_eq!(json["data"]["summary"]["legend_count"], 0);
}

#[test]
fn test_report_applies_skills_and_logs_in_order() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.args([
        "--robot",
        "report",
        "--skill",
        "Guitar:guitar",
        "--skill",
        "  Chess ",
        "--log",
        "Guitar=1.5",
        "--log",
        "Guitar=2",
        "--log",
        "Chess=0.25",
    ]));

    let skills = json["data"]["skills"].as_array().unwrap();
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0]["name"], "Guitar");
    assert_eq!(skills[0]["icon"], "guitar");
    assert_eq!(skills[0]["hours"], 3.5);
    assert_eq!(skills[0]["today_hours"], 3.5);
    assert_eq!(skills[1]["name"], "Chess");
    assert_eq!(skills[1]["icon"], "star");
    assert!(json.get("warnings").is_none());
}

#[test]
fn test_report_warns_about_ignored_actions() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.args([
        "--robot",
        "report",
        "--skill",
        "   ",
        "--skill",
        "Go",
        "--log",
        "Go=0",
        "--log",
        "Go=-3",
        "--log",
        "Tennis=1",
    ]));

    assert_eq!(json["data"]["skills"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["skills"][0]["hours"], 0.0);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 4);
}

#[test]
fn test_report_refuses_overflowing_total() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.args([
        "--robot",
        "report",
        "--skill",
        "Chess",
        "--log",
        "Chess=1e308",
        "--log",
        "Chess=1e308",
    ]));

    let chess = &json["data"]["skills"][0];
    assert_eq!(chess["hours"], 1e308);
    assert_eq!(chess["tier"]["name"], "Legend");
    assert_eq!(chess["progress_percent"], 100.0);
    assert_eq!(json["data"]["summary"]["legend_count"], 1);
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("overflow"));
}

#[test]
fn test_report_rejects_malformed_log() {
    let (mut cmd, _home) = tenk();
    cmd.args(["report", "--log", "Guitar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=HOURS"));
}

#[test]
fn test_report_default_icon_from_env() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(
        cmd.env("TENK_DEFAULT_ICON", "music")
            .args(["--robot", "report", "--skill", "Piano"]),
    );
    assert_eq!(json["data"]["skills"][0]["icon"], "music");
}

#[test]
fn test_report_without_daily_stats_has_no_today_hours() {
    let (mut cmd, _home) = tenk();
    let json = robot_json(cmd.env("TENK_DAILY_STATS", "false").args([
        "--robot",
        "report",
        "--skill",
        "Piano",
        "--log",
        "Piano=2",
    ]));
    assert_eq!(json["data"]["skills"][0]["hours"], 2.0);
    assert_eq!(json["data"]["skills"][0]["today_hours"], 0.0);
}

#[test]
fn test_config_file_seeds_demo() {
    let (mut cmd, home) = tenk();
    let config_path = home.path().join("custom.toml");
    fs::write(&config_path, "[session]\nseed_demo = true\n").unwrap();

    let json = robot_json(cmd.args(["--robot", "--config"]).arg(&config_path).arg("report"));
    assert_eq!(json["data"]["summary"]["skill_count"], 3);
}

#[test]
fn test_global_config_is_picked_up() {
    let (mut cmd, home) = tenk();
    let dir = home.path().join("tenk");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[tracking]\ndefault_icon = \"book\"\n").unwrap();

    let json = robot_json(cmd.args(["--robot", "report", "--skill", "Latin"]));
    assert_eq!(json["data"]["skills"][0]["icon"], "book");
}

#[test]
fn test_missing_explicit_config_fails() {
    let (mut cmd, home) = tenk();
    let output = cmd
        .env("TENK_CONFIG", home.path().join("nope.toml"))
        .args(["--robot", "levels"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["code"], "config_error");
}

#[test]
fn test_invalid_theme_env_fails() {
    let (mut cmd, _home) = tenk();
    cmd.env("TENK_THEME", "sepia")
        .arg("levels")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TENK_THEME"));
}

#[test]
fn test_dashboard_refuses_robot_mode() {
    let (mut cmd, _home) = tenk();
    let output = cmd.args(["--robot", "dashboard"]).output().unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["code"], "validation_failed");
}

#[test]
fn test_dashboard_needs_a_terminal() {
    let (mut cmd, _home) = tenk();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("terminal"));
}

#[test]
fn test_dashboard_logs_go_to_file() {
    let (mut cmd, home) = tenk();
    let output = cmd.args(["-vv", "dashboard"]).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("terminal"));
    assert!(!stderr.contains("output mode selected"));

    let log = fs::read_to_string(home.path().join("cache/tenk/dashboard.log")).unwrap();
    assert!(log.contains("output mode selected"));
}

#[test]
fn test_one_shot_commands_log_to_stderr() {
    let (mut cmd, _home) = tenk();
    cmd.args(["-vv", "levels"])
        .assert()
        .success()
        .stderr(predicate::str::contains("output mode selected"));
}

#[test]
fn test_completions_bash() {
    let (mut cmd, _home) = tenk();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tenk"));
}
