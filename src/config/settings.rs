//! User settings for salesdash
//!
//! Manages preferences for data generation (seed, years, base amounts) and
//! presentation (currency symbol, initial chart state, refresh rate).

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::DashboardError;
use crate::models::{ChartState, ChartType};
use crate::services::{YearPlan, MAX_BASE_AMOUNT};

/// User settings for salesdash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Fixed seed for data generation; random per session when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Most recent year to generate; the current calendar year when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_year: Option<i32>,

    /// Nominal sales scale per year, most recent year first
    #[serde(default = "default_base_amounts")]
    pub base_amounts: Vec<f64>,

    /// Chart type shown at startup
    #[serde(default)]
    pub default_chart_type: ChartType,

    /// Sales threshold applied at startup
    #[serde(default)]
    pub default_threshold: f64,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_base_amounts() -> Vec<f64> {
    vec![285_000.0, 245_000.0, 198_000.0]
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            seed: None,
            latest_year: None,
            base_amounts: default_base_amounts(),
            default_chart_type: ChartType::default(),
            default_threshold: 0.0,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        let settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DashboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            log::debug!("loaded settings from {}", settings_path.display());
            settings
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            DashboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        log::info!("saved settings to {}", settings_path.display());
        Ok(())
    }

    /// Check that the settings can drive data generation
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.currency_symbol.is_empty() {
            return Err(DashboardError::Config("currency_symbol must not be empty".into()));
        }

        if self.base_amounts.is_empty() {
            return Err(DashboardError::Config(
                "base_amounts must list at least one year".into(),
            ));
        }

        if let Some(bad) = self
            .base_amounts
            .iter()
            .find(|amount| !amount.is_finite() || **amount <= 0.0 || **amount > MAX_BASE_AMOUNT)
        {
            return Err(DashboardError::Config(format!(
                "base_amounts must be positive and at most {}, found {}",
                MAX_BASE_AMOUNT, bad
            )));
        }

        if self.tick_rate_ms == 0 {
            return Err(DashboardError::Config("tick_rate_ms must be positive".into()));
        }

        Ok(())
    }

    /// The most recent year to generate
    pub fn resolved_latest_year(&self) -> i32 {
        self.latest_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// One plan per base amount, counting back from the latest year
    pub fn year_plan(&self) -> Vec<YearPlan> {
        let latest = self.resolved_latest_year();
        self.base_amounts
            .iter()
            .enumerate()
            .map(|(offset, &base)| YearPlan::new(latest - offset as i32, base))
            .collect()
    }

    /// Initial chart state for a new dashboard
    pub fn initial_chart_state(&self) -> ChartState {
        ChartState::new(self.default_chart_type, self.default_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.base_amounts, vec![285_000.0, 245_000.0, 198_000.0]);
        assert_eq!(settings.default_chart_type, ChartType::Bar);
        assert!(settings.seed.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.seed = Some(99);
        settings.default_chart_type = ChartType::Line;
        settings.currency_symbol = "€".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.seed, Some(99));
        assert_eq!(loaded.default_chart_type, ChartType::Line);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "default_chart_type": "pie" }"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_chart_type, ChartType::Pie);
        assert_eq!(loaded.base_amounts.len(), 3);
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_base_amounts() {
        let mut settings = Settings::default();
        settings.base_amounts = vec![100.0, -5.0];
        assert!(settings.validate().is_err());

        settings.base_amounts = vec![f64::INFINITY];
        assert!(settings.validate().is_err());

        settings.base_amounts = vec![1e30];
        assert!(settings.validate().is_err());

        settings.base_amounts = vec![MAX_BASE_AMOUNT];
        assert!(settings.validate().is_ok());

        settings.base_amounts.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_huge_base_amount_in_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "base_amounts": [1e30] }"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_year_plan_counts_back() {
        let mut settings = Settings::default();
        settings.latest_year = Some(2024);

        let plan = settings.year_plan();
        let years: Vec<i32> = plan.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2024, 2023, 2022]);
        assert_eq!(plan[2].base_amount, 198_000.0);
    }

    #[test]
    fn test_initial_chart_state() {
        let mut settings = Settings::default();
        settings.default_chart_type = ChartType::Pie;
        settings.default_threshold = 1000.0;

        let state = settings.initial_chart_state();
        assert_eq!(state.chart_type(), ChartType::Pie);
        assert_eq!(state.threshold(), 1000.0);
    }
}
