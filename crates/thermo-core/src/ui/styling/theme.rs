//! Theme selection
//!
//! Combines the page palette and chart palette for one [`ThemeMode`].

use crate::state::ThemeMode;

use super::colors::{ChartPalette, ColorPalette};

/// Every color the dashboard needs for one theme mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Page chrome colors
    pub palette: ColorPalette,
    /// Chart series, reference line and grid colors
    pub chart: ChartPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            chart: ChartPalette::light(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            chart: ChartPalette::dark(),
        }
    }

    /// Theme for the given mode
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}
