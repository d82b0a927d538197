/// Application configuration management
/// Reads user preferences from ~/.config/starwatch/config.toml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::alerts::Thresholds;
use crate::core::error::StarwatchError;
use crate::core::poller::PollConfig;
use crate::utils::constants::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dish gRPC address (host:port)
    pub dish_address: String,
    /// CSV log destination used when logging is enabled
    pub log_file: PathBuf,
    pub poll: PollSettings,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    pub interval_secs: u64,
    pub failure_backoff_secs: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            failure_backoff_secs: DEFAULT_FAILURE_BACKOFF_SECS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dish_address: DEFAULT_DISH_ADDRESS.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            poll: PollSettings::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl AppConfig {
    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .map_err(StarwatchError::from)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or invert the policy
    pub fn validate(&self) -> std::result::Result<(), StarwatchError> {
        if self.poll.interval_secs == 0 || self.poll.failure_backoff_secs == 0 {
            return Err(StarwatchError::InvalidConfig(
                "poll intervals must be at least one second".to_string(),
            ));
        }

        let t = &self.thresholds;
        if !(t.alignment_ok_deg > 0.0 && t.alignment_marginal_deg > t.alignment_ok_deg) {
            return Err(StarwatchError::InvalidConfig(format!(
                "alignment thresholds must satisfy 0 < ok ({}) < marginal ({})",
                t.alignment_ok_deg, t.alignment_marginal_deg
            )));
        }

        if !t.obstruction_alert_percent.is_finite() || t.obstruction_alert_percent < 0.0 {
            return Err(StarwatchError::InvalidConfig(format!(
                "obstruction alert threshold must be a non-negative percentage, got {}",
                t.obstruction_alert_percent
            )));
        }

        Ok(())
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            interval: Duration::from_secs(self.poll.interval_secs),
            failure_backoff: Duration::from_secs(self.poll.failure_backoff_secs),
            thresholds: self.thresholds,
        }
    }

    /// Directory for the diagnostic log
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_fixed_policy() {
        let config = AppConfig::default();
        assert_eq!(config.dish_address, "192.168.100.1:9200");
        assert_eq!(config.log_file, PathBuf::from("starwatch-log.csv"));
        assert_eq!(config.poll_config(), PollConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
dish_address = "10.0.0.2:9200"

[thresholds]
obstruction_alert_percent = 1.5
"#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.dish_address, "10.0.0.2:9200");
        assert_eq!(config.thresholds.obstruction_alert_percent, 1.5);
        assert_eq!(config.thresholds.alignment_ok_deg, 2.0);
        assert_eq!(config.poll.interval_secs, 5);
    }

    #[test]
    fn test_poll_settings_become_durations() {
        let file = write_config("[poll]\ninterval_secs = 10\nfailure_backoff_secs = 30\n");
        let poll = AppConfig::load_from(file.path()).unwrap().poll_config();
        assert_eq!(poll.interval, Duration::from_secs(10));
        assert_eq!(poll.failure_backoff, Duration::from_secs(30));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let file = write_config("[poll]\ninterval_secs = 0\n");
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_rejects_inverted_alignment_tiers() {
        let file = write_config("[thresholds]\nalignment_ok_deg = 5.0\nalignment_marginal_deg = 2.0\n");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("alignment thresholds"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("dish_address = [not toml");
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load_from(Path::new("/nonexistent/starwatch.toml")).is_err());
    }
}
