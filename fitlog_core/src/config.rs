//! Configuration file support for fitlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitlog/config.toml`.
//! Every section is optional; missing keys fall back to defaults.

use crate::{CalorieRates, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calories: CalorieRates,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub charts: ChartConfig,
}

/// Interactive dashboard configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Log a few sample activities and readings at startup
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,

    /// Metric plotted by the "metric over time" menu entry
    #[serde(default = "default_tracked_metric")]
    pub tracked_metric: String,

    /// Width in columns of the longest terminal chart bar
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sample_data: default_sample_data(),
            tracked_metric: default_tracked_metric(),
            chart_width: default_chart_width(),
        }
    }
}

/// Chart export configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ChartConfig {
    /// When set, chart data is also written as CSV into this directory
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

// Default value functions
fn default_sample_data() -> bool {
    true
}

fn default_tracked_metric() -> String {
    "Weight_KG".into()
}

fn default_chart_width() -> usize {
    40
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Unable to determine config directory".into()))?;
        Ok(base.join("fitlog").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values the dashboard cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.dashboard.tracked_metric.trim().is_empty() {
            return Err(Error::Config("dashboard.tracked_metric must not be empty".into()));
        }
        if self.dashboard.chart_width == 0 {
            return Err(Error::Config("dashboard.chart_width must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.dashboard.sample_data);
        assert_eq!(config.dashboard.tracked_metric, "Weight_KG");
        assert_eq!(config.dashboard.chart_width, 40);
        assert_eq!(config.calories, CalorieRates::default());
        assert!(config.charts.export_dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[dashboard]
sample_data = false

[calories.rates]
Rowing = 8.5
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.dashboard.sample_data);
        assert_eq!(config.dashboard.tracked_metric, "Weight_KG"); // default
        assert_eq!(config.calories.rate_for("Rowing"), 8.5);
        assert_eq!(config.calories.rate_for("Yoga"), 5.0); // default
        // Untouched built-in rates survive
        assert_eq!(config.calories.rate_for("Running"), 10.0);
        assert_eq!(config.calories.rate_for("Cycling"), 7.0);
    }

    #[test]
    fn test_save_and_load_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.dashboard.tracked_metric = "RestingHR_BPM".into();
        config.charts.export_dir = Some(temp_dir.path().join("charts"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.dashboard.tracked_metric, "RestingHR_BPM");
        assert_eq!(loaded.charts.export_dir, config.charts.export_dir);
        assert_eq!(loaded.calories, config.calories);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[dashboard]\nchart_width = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[dashboard\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
