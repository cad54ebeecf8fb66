//! Dashboard view state and its single update function
//!
//! All view state lives in one [`DashboardState`] record. Every user action
//! is a [`DashboardAction`] and goes through [`DashboardState::update`],
//! which consumes the old state and returns the next one. Rendering reads the
//! state and never mutates it.

mod settings;

pub use settings::{ChartStyle, Settings, ThemeMode};

use log::{debug, warn};
use rand::Rng;

use crate::model::{AmbientEstimate, MAX_HOUR, Series, TemperatureModel, TemperatureUnit};

/// Hour selected before the user touches the slider
pub const DEFAULT_SELECTED_HOUR: u8 = 12;

/// Discrete user actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Select an hour (clamped to 0..=23)
    SelectHour(u8),
    /// Move the hour selection one step later
    NextHour,
    /// Move the hour selection one step earlier
    PreviousHour,
    /// Replace the series with a freshly generated one
    RefreshSeries,
    /// Estimate the ambient temperature at the selected hour
    CalculateAmbient,
    SetUnit(TemperatureUnit),
    ToggleUnit,
    SetGridlines(bool),
    ToggleGridlines,
    SetChartStyle(ChartStyle),
    CycleChartStyle,
    SetTheme(ThemeMode),
    ToggleTheme,
    /// Open or close the settings panel
    ToggleSettingsPanel,
}

/// Complete view state of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    model: TemperatureModel,
    selected_hour: u8,
    settings: Settings,
    series: Series,
    generation: u32,
    ambient: Option<AmbientEstimate>,
    settings_open: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(TemperatureModel::default(), Settings::default(), DEFAULT_SELECTED_HOUR)
    }
}

impl DashboardState {
    /// Create a state with an empty series
    ///
    /// Dispatch [`DashboardAction::RefreshSeries`] to generate the first
    /// series.
    pub fn new(model: TemperatureModel, settings: Settings, selected_hour: u8) -> Self {
        Self {
            model,
            selected_hour: selected_hour.min(MAX_HOUR),
            settings,
            series: Series::empty(),
            generation: 0,
            ambient: None,
            settings_open: false,
        }
    }

    /// Apply one action and return the resulting state
    pub fn update<R: Rng + ?Sized>(mut self, action: DashboardAction, rng: &mut R) -> Self {
        match action {
            DashboardAction::SelectHour(hour) => {
                if hour > MAX_HOUR {
                    warn!("Hour {} out of range, clamping to {}", hour, MAX_HOUR);
                }
                self.selected_hour = hour.min(MAX_HOUR);
            }
            DashboardAction::NextHour => {
                self.selected_hour = self.selected_hour.saturating_add(1).min(MAX_HOUR);
            }
            DashboardAction::PreviousHour => {
                self.selected_hour = self.selected_hour.saturating_sub(1);
            }
            DashboardAction::RefreshSeries => {
                self.series = self.model.generate(rng);
                self.generation = self.generation.wrapping_add(1);
                debug!("Series regenerated (generation {})", self.generation);
            }
            DashboardAction::CalculateAmbient => {
                let hour = self.selected_hour;
                match self.model.estimate(&self.series, hour, rng) {
                    Some(celsius) => {
                        self.ambient = Some(AmbientEstimate {
                            hour,
                            celsius,
                            generation: self.generation,
                        });
                    }
                    None => debug!("No sample for {}:00, keeping previous estimate", hour),
                }
            }
            DashboardAction::SetUnit(unit) => self.settings.unit = unit,
            DashboardAction::ToggleUnit => self.settings.unit = self.settings.unit.toggled(),
            DashboardAction::SetGridlines(show) => self.settings.show_gridlines = show,
            DashboardAction::ToggleGridlines => {
                self.settings.show_gridlines = !self.settings.show_gridlines;
            }
            DashboardAction::SetChartStyle(style) => self.settings.chart_style = style,
            DashboardAction::CycleChartStyle => {
                self.settings.chart_style = self.settings.chart_style.next();
            }
            DashboardAction::SetTheme(theme) => self.settings.theme = theme,
            DashboardAction::ToggleTheme => self.settings.theme = self.settings.theme.toggled(),
            DashboardAction::ToggleSettingsPanel => self.settings_open = !self.settings_open,
        }

        self
    }

    pub fn model(&self) -> &TemperatureModel {
        &self.model
    }

    pub fn selected_hour(&self) -> u8 {
        self.selected_hour
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Number of times the series has been generated
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Most recent estimate, if one was ever computed
    pub fn ambient(&self) -> Option<&AmbientEstimate> {
        self.ambient.as_ref()
    }

    /// Whether the estimate was computed from an earlier series
    ///
    /// A stale estimate stays on screen until the user recalculates.
    pub fn ambient_is_stale(&self) -> bool {
        self.ambient
            .is_some_and(|estimate| estimate.generation != self.generation)
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SamplePoint;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn started(rng: &mut StdRng) -> DashboardState {
        DashboardState::default().update(DashboardAction::RefreshSeries, rng)
    }

    #[test]
    fn test_default_state() {
        let state = DashboardState::default();
        assert_eq!(state.selected_hour(), 12);
        assert_eq!(state.settings(), &Settings::default());
        assert!(state.series().is_empty());
        assert!(state.ambient().is_none());
        assert!(!state.settings_open());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_refresh_generates_complete_series() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = started(&mut rng);
        assert!(state.series().is_complete());
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_estimate_absent_until_calculated() {
        let mut rng = StdRng::seed_from_u64(2);
        let state = started(&mut rng)
            .update(DashboardAction::SelectHour(3), &mut rng)
            .update(DashboardAction::ToggleUnit, &mut rng);
        assert!(state.ambient().is_none());

        let state = state.update(DashboardAction::CalculateAmbient, &mut rng);
        let estimate = state.ambient().copied().unwrap();
        assert_eq!(estimate.hour, 3);
        assert_eq!(estimate.generation, 1);

        let point = *state.series().get(3).unwrap();
        let average = state.model().estimator.weighted_average(&point);
        assert!((estimate.celsius - average).abs() <= 1.05);
    }

    #[test]
    fn test_refresh_leaves_estimate_stale() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = started(&mut rng).update(DashboardAction::CalculateAmbient, &mut rng);
        let before = state.ambient().copied();
        assert!(!state.ambient_is_stale());

        let state = state.update(DashboardAction::RefreshSeries, &mut rng);
        assert_eq!(state.ambient().copied(), before);
        assert!(state.ambient_is_stale());

        let state = state.update(DashboardAction::CalculateAmbient, &mut rng);
        assert!(!state.ambient_is_stale());
    }

    #[test]
    fn test_calculate_without_sample_keeps_previous_estimate() {
        let mut rng = StdRng::seed_from_u64(4);
        let state = started(&mut rng).update(DashboardAction::CalculateAmbient, &mut rng);
        let previous = state.ambient().copied();
        assert!(previous.is_some());

        // Swap in a partial series that lacks the selected hour
        let mut state = state;
        state.series = Series::from_points([SamplePoint::new(0, 20.0, 26.0)]).unwrap();
        let state = state.update(DashboardAction::CalculateAmbient, &mut rng);
        assert_eq!(state.ambient().copied(), previous);
    }

    #[test]
    fn test_calculate_on_empty_series_produces_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = DashboardState::default().update(DashboardAction::CalculateAmbient, &mut rng);
        assert!(state.ambient().is_none());
    }

    #[test]
    fn test_hour_selection_is_clamped() {
        let mut rng = StdRng::seed_from_u64(6);
        let state = DashboardState::default();

        let state = state.update(DashboardAction::SelectHour(40), &mut rng);
        assert_eq!(state.selected_hour(), 23);
        let state = state.update(DashboardAction::NextHour, &mut rng);
        assert_eq!(state.selected_hour(), 23);

        let state = state.update(DashboardAction::SelectHour(0), &mut rng);
        let state = state.update(DashboardAction::PreviousHour, &mut rng);
        assert_eq!(state.selected_hour(), 0);
        let state = state.update(DashboardAction::NextHour, &mut rng);
        assert_eq!(state.selected_hour(), 1);

        assert_eq!(
            DashboardState::new(TemperatureModel::default(), Settings::default(), 99)
                .selected_hour(),
            23
        );
    }

    #[test]
    fn test_settings_toggle_independently() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = started(&mut rng);
        let series = state.series().clone();

        let state = state
            .update(DashboardAction::ToggleGridlines, &mut rng)
            .update(DashboardAction::CycleChartStyle, &mut rng)
            .update(DashboardAction::ToggleTheme, &mut rng)
            .update(DashboardAction::SetUnit(TemperatureUnit::Fahrenheit), &mut rng);

        assert_eq!(
            state.settings(),
            &Settings {
                unit: TemperatureUnit::Fahrenheit,
                show_gridlines: false,
                chart_style: ChartStyle::Curved,
                theme: ThemeMode::Dark,
            }
        );
        // Unit changes never touch the stored Celsius values
        assert_eq!(state.series(), &series);

        let state = state
            .update(DashboardAction::SetGridlines(true), &mut rng)
            .update(DashboardAction::SetChartStyle(ChartStyle::Stepped), &mut rng)
            .update(DashboardAction::SetTheme(ThemeMode::Light), &mut rng);
        assert!(state.settings().show_gridlines);
        assert_eq!(state.settings().chart_style, ChartStyle::Stepped);
        assert_eq!(state.settings().theme, ThemeMode::Light);
    }

    #[test]
    fn test_settings_panel_toggle() {
        let mut rng = StdRng::seed_from_u64(8);
        let state = DashboardState::default().update(DashboardAction::ToggleSettingsPanel, &mut rng);
        assert!(state.settings_open());
        let state = state.update(DashboardAction::ToggleSettingsPanel, &mut rng);
        assert!(!state.settings_open());
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let actions = [
            DashboardAction::RefreshSeries,
            DashboardAction::SelectHour(9),
            DashboardAction::CalculateAmbient,
            DashboardAction::RefreshSeries,
            DashboardAction::CalculateAmbient,
        ];

        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            actions
                .iter()
                .fold(DashboardState::default(), |state, action| {
                    state.update(*action, &mut rng)
                })
        };

        assert_eq!(run(42), run(42));
    }
}
