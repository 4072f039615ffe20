//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/mindmate/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/mindmate/` (~/.config/mindmate/)
//! - Data: `$XDG_DATA_HOME/mindmate/` (~/.local/share/mindmate/)
//! - State/Logs: `$XDG_STATE_HOME/mindmate/` (~/.local/state/mindmate/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics configuration
///
/// Tunes the windows and thresholds the mood analytics engine uses.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Days of mood samples the gentle check-in looks back over
    #[serde(default = "default_check_in_window_days")]
    pub check_in_window_days: usize,

    /// Negative days within the window required to trigger a check-in
    #[serde(default = "default_check_in_negative_threshold")]
    pub check_in_negative_threshold: usize,

    /// Number of buckets for the mood trend series
    #[serde(default = "default_trend_buckets")]
    pub trend_buckets: usize,

    /// Journal entries considered by the improvement estimate
    #[serde(default = "default_journal_window")]
    pub journal_window: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            check_in_window_days: default_check_in_window_days(),
            check_in_negative_threshold: default_check_in_negative_threshold(),
            trend_buckets: default_trend_buckets(),
            journal_window: default_journal_window(),
        }
    }
}

fn default_check_in_window_days() -> usize {
    14
}

fn default_check_in_negative_threshold() -> usize {
    10
}

fn default_trend_buckets() -> usize {
    6
}

fn default_journal_window() -> usize {
    10
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/mindmate/config.toml` (~/.config/mindmate/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("mindmate").join("config.toml")
    }

    /// Returns the data directory path (for SQLite database)
    ///
    /// `$XDG_DATA_HOME/mindmate/` (~/.local/share/mindmate/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("mindmate")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/mindmate/` (~/.local/state/mindmate/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("mindmate")
    }

    /// Returns the database file path
    ///
    /// `$XDG_DATA_HOME/mindmate/data.db` (~/.local/share/mindmate/data.db)
    pub fn database_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/mindmate/mindmate.log` (~/.local/state/mindmate/mindmate.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("mindmate.log")
    }

    /// Ensure XDG base directory environment variables are set.
    ///
    /// This is mainly for CLI binaries that want explicit, stable path behavior
    /// before invoking other components that read these env vars.
    pub fn ensure_xdg_env() {
        let home = home_dir();

        if std::env::var("XDG_DATA_HOME").is_err() {
            std::env::set_var("XDG_DATA_HOME", home.join(".local/share"));
        }

        if std::env::var("XDG_STATE_HOME").is_err() {
            std::env::set_var("XDG_STATE_HOME", home.join(".local/state"));
        }

        if std::env::var("XDG_CONFIG_HOME").is_err() {
            std::env::set_var("XDG_CONFIG_HOME", home.join(".config"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analytics.check_in_window_days, 14);
        assert_eq!(config.analytics.check_in_negative_threshold, 10);
        assert_eq!(config.analytics.trend_buckets, 6);
        assert_eq!(config.analytics.journal_window, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analytics]
check_in_window_days = 21
check_in_negative_threshold = 12
trend_buckets = 8

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.analytics.check_in_window_days, 21);
        assert_eq!(config.analytics.check_in_negative_threshold, 12);
        assert_eq!(config.analytics.trend_buckets, 8);
        // missing fields keep their defaults
        assert_eq!(config.analytics.journal_window, 10);
        assert_eq!(config.logging.level, "debug");
    }
}
