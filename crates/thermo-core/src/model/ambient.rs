//! Ambient temperature estimation from a single hourly sample

use log::debug;
use rand::Rng;

use super::round_to_tenth;
use super::sample::{SamplePoint, Series};

/// Weighted-average heuristic with bounded uniform noise
///
/// `estimate = round(local_weight * local + battery_weight * battery + U(-noise, noise), 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientEstimator {
    /// Weight of the local temperature
    pub local_weight: f32,
    /// Weight of the battery temperature
    pub battery_weight: f32,
    /// Half-width of the uniform noise in °C
    pub noise_amplitude: f32,
}

impl Default for AmbientEstimator {
    fn default() -> Self {
        Self {
            local_weight: 0.6,
            battery_weight: 0.4,
            noise_amplitude: 1.0,
        }
    }
}

impl AmbientEstimator {
    /// Noise-free weighted average for one sample
    pub fn weighted_average(&self, point: &SamplePoint) -> f32 {
        self.local_weight * point.local_temperature
            + self.battery_weight * point.battery_temperature
    }

    /// Estimate the ambient temperature at `hour`
    ///
    /// Returns `None` if `series` has no sample for `hour`; no randomness is
    /// consumed in that case.
    pub fn estimate<R: Rng + ?Sized>(&self, series: &Series, hour: u8, rng: &mut R) -> Option<f32> {
        let point = series.get(hour)?;

        let noise = if self.noise_amplitude > 0.0 {
            rng.gen_range(-self.noise_amplitude..self.noise_amplitude)
        } else {
            0.0
        };

        let estimate = round_to_tenth(self.weighted_average(point) + noise);
        debug!("Ambient estimate at {}:00 = {:.1}°C", hour, estimate);
        Some(estimate)
    }
}

/// An ambient estimate tied to the hour and series it was computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientEstimate {
    /// Hour that was selected when the estimate was computed
    pub hour: u8,
    /// Estimated ambient temperature in °C
    pub celsius: f32,
    /// Generation of the series the estimate was computed from
    pub generation: u32,
}
