use assert_cmd::Command;
use tempfile::TempDir;

/// `tenk` command isolated from the caller's config and environment.
///
/// The returned directory backs `HOME`, `XDG_CONFIG_HOME` and
/// `XDG_CACHE_HOME` (under `cache/`) and must outlive the command.
pub fn tenk() -> (Command, TempDir) {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("tenk").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("TENK_CONFIG")
        .env_remove("TENK_OUTPUT_FORMAT")
        .env_remove("TENK_THEME")
        .env_remove("TENK_HISTORY_DAYS")
        .env_remove("TENK_TICK_MS")
        .env_remove("TENK_DAILY_STATS")
        .env_remove("TENK_DEFAULT_ICON")
        .env_remove("TENK_SEED_DEMO")
        .env_remove("TENK_PLAIN_OUTPUT");
    (cmd, home)
}

pub fn robot_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
