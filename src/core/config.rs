use crate::core::inputs::RoiInputs;
use crate::core::report::DEFAULT_REPORT_TITLE;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_report_title")]
    pub title: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: default_report_title(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub inputs: RoiInputs,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            inputs: RoiInputs::default(),
            report: ReportConfig::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    /// Loads the config at the default path, or built-in defaults when there
    /// is no file there yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "roicalc", "roicalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
currency_symbol: "€"
inputs:
  revenue_increase: 250000
  cloud_costs: 15000.5
  people_removed: 2
report:
  title: "Quarterly ROI"
  output_dir: "out"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.inputs.revenue_increase, 250000.0);
        assert_eq!(config.inputs.cloud_costs, 15000.5);
        assert_eq!(config.inputs.people_removed, 2.0);
        assert_eq!(config.inputs.cost_savings, 50000.0);
        assert_eq!(config.report.title, "Quarterly ROI");
        assert_eq!(config.report.output_dir, "out");
    }

    #[test]
    fn test_empty_sections_fall_back_to_defaults() {
        let yaml_str = r#"
report:
  output_dir: "/tmp/reports"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.inputs, RoiInputs::default());
        assert_eq!(config.report.title, "ROI Summary Report");
        assert_eq!(config.report.output_dir, "/tmp/reports");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "inputs:\n  hourly_rate: 75")?;

        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config.inputs.hourly_rate, 75.0);
        Ok(())
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let err = AppConfig::load_from_path("/nonexistent/roicalc/config.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_from_invalid_yaml_fails() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "inputs:\n  hourly_rate: fifty")?;

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }
}
