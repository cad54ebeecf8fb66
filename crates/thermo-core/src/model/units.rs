//! Display unit conversion
//!
//! Temperatures are always stored in Celsius. Conversion happens only at
//! display time and never writes back into the model.

use core::fmt::Write;

use heapless::String;
use serde::{Deserialize, Serialize};

use super::round_to_tenth;

/// Maximum length of a formatted temperature label (bytes)
pub const MAX_TEMPERATURE_LABEL_LENGTH: usize = 16;

/// Unit used to present temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit suffix, e.g. `°C`
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Human-readable unit name
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }

    /// The other unit
    pub fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}

/// Convert a Celsius value into `unit` for display
///
/// Celsius values are returned unchanged; Fahrenheit values are rounded to
/// one decimal place.
pub fn to_display_unit(celsius: f32, unit: TemperatureUnit) -> f32 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => round_to_tenth(celsius * 9.0 / 5.0 + 32.0),
    }
}

/// Convert a displayed value in `unit` back to Celsius
pub fn from_display_unit(value: f32, unit: TemperatureUnit) -> f32 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => round_to_tenth((value - 32.0) * 5.0 / 9.0),
    }
}

/// Format a Celsius value in `unit` with its suffix, e.g. `71.6°F`
pub fn format_temperature(celsius: f32, unit: TemperatureUnit) -> String<MAX_TEMPERATURE_LABEL_LENGTH> {
    let mut s = String::new();
    let written = write!(s, "{:.1}{}", to_display_unit(celsius, unit), unit.symbol());
    debug_assert!(
        written.is_ok(),
        "temperature label over {} bytes",
        MAX_TEMPERATURE_LABEL_LENGTH
    );
    s
}
