//! Synthetic 24-hour series generation

use core::f32::consts::PI;

extern crate alloc;
use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use super::sample::{SamplePoint, Series};
use super::{HOURS_PER_DAY, round_to_tenth};

/// Shape of one synthetic temperature channel
///
/// A reading at hour `h` is
/// `baseline + amplitude * sin(h * π / 12) + U(0, jitter)`,
/// rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelProfile {
    /// Center of the daily cycle in °C
    pub baseline: f32,
    /// Peak deviation of the daily cycle in °C
    pub amplitude: f32,
    /// Upper bound (exclusive) of the uniform jitter in °C
    pub jitter: f32,
}

impl ChannelProfile {
    /// Local temperature: 18 °C ± 5 °C, up to 2 °C jitter
    pub const LOCAL: Self = Self::new(18.0, 5.0, 2.0);

    /// Battery temperature: 25 °C ± 5 °C, up to 3 °C jitter
    pub const BATTERY: Self = Self::new(25.0, 5.0, 3.0);

    /// Create a new channel profile
    pub const fn new(baseline: f32, amplitude: f32, jitter: f32) -> Self {
        Self {
            baseline,
            amplitude,
            jitter,
        }
    }

    /// Noise-free value of the daily cycle at `hour`
    pub fn cycle(&self, hour: u8) -> f32 {
        self.baseline + self.amplitude * libm::sinf(hour as f32 * PI / 12.0)
    }

    /// Draw one reading for `hour`
    pub fn sample<R: Rng + ?Sized>(&self, hour: u8, rng: &mut R) -> f32 {
        let noise = if self.jitter > 0.0 {
            rng.gen_range(0.0..self.jitter)
        } else {
            0.0
        };

        round_to_tenth(self.cycle(hour) + noise)
    }

    /// Inclusive range every reading falls in, before rounding
    pub fn bounds(&self) -> (f32, f32) {
        let amplitude = libm::fabsf(self.amplitude);
        (
            self.baseline - amplitude,
            self.baseline + amplitude + self.jitter.max(0.0),
        )
    }
}

/// Generator for the synthetic local/battery series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesGenerator {
    /// Local temperature channel
    pub local: ChannelProfile,
    /// Battery temperature channel
    pub battery: ChannelProfile,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self {
            local: ChannelProfile::LOCAL,
            battery: ChannelProfile::BATTERY,
        }
    }
}

impl SeriesGenerator {
    /// Generate one sample per hour, 0 through 23
    ///
    /// For every hour the local reading is drawn before the battery reading.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Series {
        let points: Vec<SamplePoint> = (0..HOURS_PER_DAY)
            .map(|hour| {
                let local = self.local.sample(hour, rng);
                let battery = self.battery.sample(hour, rng);
                SamplePoint::new(hour, local, battery)
            })
            .collect();

        debug!("Generated synthetic series with {} samples", points.len());
        Series::from_sorted_unchecked(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn has_one_decimal(value: f32) -> bool {
        let scaled = value * 10.0;
        (scaled - scaled.round()).abs() < 1e-3
    }

    #[test]
    fn test_generated_series_covers_every_hour_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = SeriesGenerator::default().generate(&mut rng);

        assert_eq!(series.len(), 24);
        assert!(series.is_complete());
        for (expected, point) in (0..24u8).zip(series.iter()) {
            assert_eq!(point.hour, expected);
        }
    }

    #[test]
    fn test_generated_values_stay_in_channel_bounds() {
        let generator = SeriesGenerator::default();
        let (local_min, local_max) = generator.local.bounds();
        let (battery_min, battery_max) = generator.battery.bounds();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = generator.generate(&mut rng);

            for point in series.iter() {
                assert!(point.local_temperature >= local_min - 0.05);
                assert!(point.local_temperature <= local_max + 0.05);
                assert!(point.battery_temperature >= battery_min - 0.05);
                assert!(point.battery_temperature <= battery_max + 0.05);
                assert!(has_one_decimal(point.local_temperature));
                assert!(has_one_decimal(point.battery_temperature));
            }
        }
    }

    #[test]
    fn test_default_channel_bounds() {
        assert_eq!(ChannelProfile::LOCAL.bounds(), (13.0, 25.0));
        assert_eq!(ChannelProfile::BATTERY.bounds(), (20.0, 33.0));
    }

    #[test]
    fn test_jitter_lies_above_the_cycle() {
        let generator = SeriesGenerator::default();
        let mut rng = StdRng::seed_from_u64(11);
        let series = generator.generate(&mut rng);

        for point in series.iter() {
            let local_noise = point.local_temperature - generator.local.cycle(point.hour);
            let battery_noise = point.battery_temperature - generator.battery.cycle(point.hour);
            assert!((-0.05..2.05).contains(&local_noise));
            assert!((-0.05..3.05).contains(&battery_noise));
        }
    }

    #[test]
    fn test_zero_jitter_is_deterministic() {
        let generator = SeriesGenerator {
            local: ChannelProfile::new(18.0, 5.0, 0.0),
            battery: ChannelProfile::new(25.0, 5.0, 0.0),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let series = generator.generate(&mut rng);

        let noon = series.get(12).unwrap();
        assert_eq!(noon.local_temperature, 18.0);
        assert_eq!(noon.battery_temperature, 25.0);

        let six = series.get(6).unwrap();
        assert_eq!(six.local_temperature, 23.0);
        assert_eq!(six.battery_temperature, 30.0);
    }

    #[test]
    fn test_same_seed_same_series() {
        let generator = SeriesGenerator::default();
        let a = generator.generate(&mut StdRng::seed_from_u64(99));
        let b = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
