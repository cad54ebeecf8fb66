//! Independent view settings toggled from the settings panel

use serde::{Deserialize, Serialize};

use crate::model::TemperatureUnit;

/// How the series lines are drawn between samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// Straight segments
    #[default]
    Linear,
    /// Monotone curve through every sample
    Curved,
    /// Horizontal step until the next sample
    Stepped,
}

impl ChartStyle {
    /// Next style in settings order (wraps around)
    pub fn next(self) -> Self {
        match self {
            ChartStyle::Linear => ChartStyle::Curved,
            ChartStyle::Curved => ChartStyle::Stepped,
            ChartStyle::Stepped => ChartStyle::Linear,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartStyle::Linear => "Linear",
            ChartStyle::Curved => "Curved",
            ChartStyle::Stepped => "Stepped",
        }
    }
}

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// User preferences; each field is set independently of the others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Unit temperatures are displayed in
    pub unit: TemperatureUnit,
    /// Whether the chart draws grid lines
    pub show_gridlines: bool,
    /// Line interpolation for both series
    pub chart_style: ChartStyle,
    /// Active color scheme
    pub theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: TemperatureUnit::Celsius,
            show_gridlines: true,
            chart_style: ChartStyle::Linear,
            theme: ThemeMode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_style_cycle_returns_to_start() {
        let start = ChartStyle::default();
        assert_eq!(start, ChartStyle::Linear);
        assert_eq!(start.next(), ChartStyle::Curved);
        assert_eq!(start.next().next(), ChartStyle::Stepped);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_theme_toggle() {
        assert!(!ThemeMode::default().is_dark());
        assert!(ThemeMode::Light.toggled().is_dark());
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
