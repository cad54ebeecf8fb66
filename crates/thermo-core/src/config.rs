//! Startup configuration for the dashboard
//!
//! A [`DashboardConfig`] describes the initial view: selected hour,
//! display settings and an optional RNG seed. Every field has a default, so
//! an empty JSON object `{}` is a valid configuration.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{MAX_HOUR, TemperatureModel, TemperatureUnit};
use crate::state::{
    ChartStyle, DEFAULT_SELECTED_HOUR, DashboardAction, DashboardState, Settings, ThemeMode,
};

/// Initial dashboard configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Hour selected at startup (0..=23)
    pub selected_hour: u8,
    /// Display unit
    pub unit: TemperatureUnit,
    /// Whether grid lines are drawn
    pub show_gridlines: bool,
    /// Line interpolation
    pub chart_style: ChartStyle,
    /// Start in dark mode
    pub dark_mode: bool,
    /// Seed for a reproducible session; entropy is used when absent
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            selected_hour: DEFAULT_SELECTED_HOUR,
            unit: TemperatureUnit::Celsius,
            show_gridlines: true,
            chart_style: ChartStyle::Linear,
            dark_mode: false,
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Check that every field is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selected_hour > MAX_HOUR {
            return Err(ConfigError::InvalidSelectedHour {
                hour: self.selected_hour,
            });
        }

        Ok(())
    }

    /// Display settings described by this configuration
    pub fn settings(&self) -> Settings {
        Settings {
            unit: self.unit,
            show_gridlines: self.show_gridlines,
            chart_style: self.chart_style,
            theme: if self.dark_mode {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            },
        }
    }

    /// Build the first dashboard state, including the startup series
    pub fn initial_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DashboardState, ConfigError> {
        self.validate()?;

        let state = DashboardState::new(TemperatureModel::default(), self.settings(), self.selected_hour);
        Ok(state.update(DashboardAction::RefreshSeries, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.settings(), Settings::default());
    }

    #[test]
    fn test_parse_partial_json() {
        let config: DashboardConfig = serde_json::from_str(
            r#"{"selected_hour": 6, "unit": "fahrenheit", "chart_style": "stepped", "dark_mode": true, "seed": 17}"#,
        )
        .unwrap();

        assert_eq!(config.selected_hour, 6);
        assert_eq!(config.seed, Some(17));
        assert!(config.show_gridlines);

        let settings = config.settings();
        assert_eq!(settings.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(settings.chart_style, ChartStyle::Stepped);
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let result: Result<DashboardConfig, _> = serde_json::from_str(r#"{"chart_style": "bars"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_hour() {
        let config = DashboardConfig {
            selected_hour: 24,
            ..DashboardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSelectedHour { hour: 24 }));

        let mut rng = StdRng::seed_from_u64(0);
        assert!(config.initial_state(&mut rng).is_err());
    }

    #[test]
    fn test_initial_state_has_series_and_no_estimate() {
        let config = DashboardConfig {
            selected_hour: 20,
            show_gridlines: false,
            ..DashboardConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let state = config.initial_state(&mut rng).unwrap();

        assert_eq!(state.selected_hour(), 20);
        assert!(!state.settings().show_gridlines);
        assert!(state.series().is_complete());
        assert!(state.ambient().is_none());
    }
}
