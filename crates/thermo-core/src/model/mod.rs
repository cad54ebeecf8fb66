//! Synthetic temperature model
//!
//! The computational core of the dashboard:
//!
//! - [`SeriesGenerator`] produces a 24-hour synthetic [`Series`] of local and
//!   battery temperatures (sinusoid plus uniform jitter).
//! - [`AmbientEstimator`] derives an ambient temperature for one hour from
//!   a fixed-weight average plus jitter.
//! - [`to_display_unit`] converts stored Celsius values for display.
//!
//! All randomness is injected through a [`rand::Rng`] so every operation is
//! reproducible under a seeded generator.

mod ambient;
mod generator;
mod sample;
mod units;

pub use ambient::{AmbientEstimate, AmbientEstimator};
pub use generator::{ChannelProfile, SeriesGenerator};
pub use sample::{SamplePoint, Series};
pub use units::{
    MAX_TEMPERATURE_LABEL_LENGTH, TemperatureUnit, format_temperature, from_display_unit,
    to_display_unit,
};

use rand::Rng;

/// Number of hourly samples in a generated series
pub const HOURS_PER_DAY: u8 = 24;

/// Largest valid hour of day
pub const MAX_HOUR: u8 = HOURS_PER_DAY - 1;

/// Round to one decimal place (half away from zero)
pub fn round_to_tenth(value: f32) -> f32 {
    libm::roundf(value * 10.0) / 10.0
}

/// Generator and estimator bundled into one model
///
/// The state layer holds a `TemperatureModel` and routes every regeneration
/// and estimate through it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureModel {
    /// Synthetic series generator
    pub generator: SeriesGenerator,
    /// Ambient temperature estimator
    pub estimator: AmbientEstimator,
}

impl TemperatureModel {
    /// Generate a fresh 24-hour series
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Series {
        self.generator.generate(rng)
    }

    /// Estimate the ambient temperature at `hour`, or `None` if the series has
    /// no sample for that hour
    pub fn estimate<R: Rng + ?Sized>(&self, series: &Series, hour: u8, rng: &mut R) -> Option<f32> {
        self.estimator.estimate(series, hour, rng)
    }
}
