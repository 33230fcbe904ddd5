use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::skill::SkillIcon;
use crate::error::{Result, TenkError};
use crate::output::ThemeMode;

const MAX_HISTORY_DAYS: u32 = 31;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Resolve the config file and apply env overrides.
    ///
    /// An explicit path (flag or `TENK_CONFIG`) that does not exist is an
    /// error; a missing default file is not.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TENK_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                TenkError::MissingConfig(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Default location: `<config_dir>/tenk/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tenk/config.toml"))
    }

    /// Where logs go while the dashboard owns the terminal:
    /// `<cache_dir>/tenk/dashboard.log`.
    #[must_use]
    pub fn dashboard_log_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("tenk/dashboard.log"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::default_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| TenkError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| TenkError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
        if let Some(patch) = patch.timer {
            self.timer.merge(patch);
        }
        if let Some(patch) = patch.tracking {
            self.tracking.merge(patch);
        }
        if let Some(patch) = patch.session {
            self.session.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("TENK_THEME") {
            self.display.theme = value
                .parse()
                .map_err(|err| TenkError::Config(format!("invalid TENK_THEME: {err}")))?;
        }
        if let Some(value) = env_u32("TENK_HISTORY_DAYS")? {
            self.display.history_days = value;
        }
        if let Some(value) = env_u64("TENK_TICK_MS")? {
            self.timer.tick_ms = value;
        }
        if let Some(value) = env_bool("TENK_DAILY_STATS") {
            self.tracking.daily_stats = value;
        }
        if let Some(value) = env_string("TENK_DEFAULT_ICON") {
            self.tracking.default_icon = value
                .parse()
                .map_err(|err| TenkError::Config(format!("invalid TENK_DEFAULT_ICON: {err}")))?;
        }
        if let Some(value) = env_bool("TENK_SEED_DEMO") {
            self.session.seed_demo = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.timer.tick_ms == 0 {
            return Err(TenkError::Config("timer.tick_ms must be > 0".to_string()));
        }
        if !(1..=MAX_HISTORY_DAYS).contains(&self.display.history_days) {
            return Err(TenkError::Config(format!(
                "display.history_days must be between 1 and {MAX_HISTORY_DAYS}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_history_days")]
    pub history_days: u32,
}

const fn default_history_days() -> u32 {
    7
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            history_days: default_history_days(),
        }
    }
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.theme {
            self.theme = value;
        }
        if let Some(value) = patch.history_days {
            self.history_days = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Display refresh cadence for running timers.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

const fn default_tick_ms() -> u64 {
    1_000
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl TimerConfig {
    fn merge(&mut self, patch: TimerPatch) {
        if let Some(value) = patch.tick_ms {
            self.tick_ms = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    #[serde(default = "default_true")]
    pub daily_stats: bool,
    #[serde(default)]
    pub default_icon: SkillIcon,
}

const fn default_true() -> bool {
    true
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            daily_stats: true,
            default_icon: SkillIcon::Star,
        }
    }
}

impl TrackingConfig {
    fn merge(&mut self, patch: TrackingPatch) {
        if let Some(value) = patch.daily_stats {
            self.daily_stats = value;
        }
        if let Some(value) = patch.default_icon {
            self.default_icon = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub seed_demo: bool,
}

impl SessionConfig {
    fn merge(&mut self, patch: SessionPatch) {
        if let Some(value) = patch.seed_demo {
            self.seed_demo = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub display: Option<DisplayPatch>,
    pub timer: Option<TimerPatch>,
    pub tracking: Option<TrackingPatch>,
    pub session: Option<SessionPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub theme: Option<ThemeMode>,
    pub history_days: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TimerPatch {
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TrackingPatch {
    pub daily_stats: Option<bool>,
    pub default_icon: Option<SkillIcon>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SessionPatch {
    pub seed_demo: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u32(key: &str) -> Result<Option<u32>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|err| TenkError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| TenkError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.display.theme, ThemeMode::Dark);
        assert_eq!(config.display.history_days, 7);
        assert_eq!(config.timer.tick_ms, 1_000);
        assert!(config.tracking.daily_stats);
        assert_eq!(config.tracking.default_icon, SkillIcon::Star);
        assert!(!config.session.seed_demo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_patch_merges_over_defaults() {
        let (_dir, path) = write_config(
            r#"
[display]
theme = "light"

[tracking]
default_icon = "guitar"
"#,
        );
        let patch = Config::load_patch(&path).unwrap().unwrap();
        let mut config = Config::default();
        config.merge_patch(patch);
        assert_eq!(config.display.theme, ThemeMode::Light);
        assert_eq!(config.display.history_days, 7);
        assert_eq!(config.tracking.default_icon, SkillIcon::Guitar);
        assert!(config.tracking.daily_stats);
    }

    #[test]
    fn icon_names_match_env_parsing() {
        let (_dir, path) = write_config("[tracking]\ndefault_icon = \"Code2\"\n");
        let patch = Config::load_patch(&path).unwrap().unwrap();
        let mut config = Config::default();
        config.merge_patch(patch);
        assert_eq!(config.tracking.default_icon, SkillIcon::Code);

        let (_dir, path) = write_config("[tracking]\ndefault_icon = \"unicorn\"\n");
        assert!(Config::load_patch(&path).is_err());
    }

    #[test]
    fn dashboard_log_lives_under_tenk() {
        if let Some(path) = Config::dashboard_log_path() {
            assert!(path.ends_with("tenk/dashboard.log"));
        }
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_patch(&dir.path().join("nope.toml")).unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let (_dir, path) = write_config("[timer]\ntick_ms = \"soon\"\n");
        let err = Config::load_patch(&path).unwrap_err();
        assert!(matches!(err, TenkError::Config(msg) if msg.contains("parse config")));
    }

    #[test]
    fn validation_rejects_out_of_range() {
        let mut config = Config::default();
        config.timer.tick_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.display.history_days = 0;
        assert!(config.validate().is_err());
        config.display.history_days = 32;
        assert!(config.validate().is_err());
    }
}
