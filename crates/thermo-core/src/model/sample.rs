//! Hourly samples and the series that holds them

extern crate alloc;
use alloc::vec::Vec;

use crate::error::ModelError;

use super::{HOURS_PER_DAY, MAX_HOUR};

/// One hourly reading, temperatures in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Local (device) temperature in °C
    pub local_temperature: f32,
    /// Battery temperature in °C
    pub battery_temperature: f32,
}

impl SamplePoint {
    /// Create a new sample point
    pub const fn new(hour: u8, local_temperature: f32, battery_temperature: f32) -> Self {
        Self {
            hour,
            local_temperature,
            battery_temperature,
        }
    }
}

/// Hourly samples ordered by ascending hour
///
/// Hours are unique and within 0..=23. A generated series always holds all
/// 24 hours; series built with [`Series::from_points`] may be partial.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Vec<SamplePoint>,
}

impl Series {
    /// A series with no samples (state before the first generation)
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from arbitrary points
    ///
    /// Points are sorted by hour. Fails on an hour above 23 or on two points
    /// with the same hour.
    pub fn from_points<I>(points: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = SamplePoint>,
    {
        let mut points: Vec<SamplePoint> = points.into_iter().collect();

        if let Some(bad) = points.iter().find(|p| p.hour > MAX_HOUR) {
            return Err(ModelError::HourOutOfRange { hour: bad.hour });
        }

        points.sort_unstable_by_key(|p| p.hour);

        if let Some(pair) = points.windows(2).find(|pair| pair[0].hour == pair[1].hour) {
            return Err(ModelError::DuplicateHour { hour: pair[0].hour });
        }

        Ok(Self { points })
    }

    /// Wrap points already produced in ascending, unique hour order
    pub(super) fn from_sorted_unchecked(points: Vec<SamplePoint>) -> Self {
        debug_assert!(points.windows(2).all(|pair| pair[0].hour < pair[1].hour));
        Self { points }
    }

    /// Look up the sample for `hour`
    pub fn get(&self, hour: u8) -> Option<&SamplePoint> {
        self.points
            .binary_search_by_key(&hour, |p| p.hour)
            .ok()
            .map(|index| &self.points[index])
    }

    /// All samples in ascending hour order
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Iterate over samples in ascending hour order
    pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> {
        self.points.iter()
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no samples
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether every hour of the day has a sample
    pub fn is_complete(&self) -> bool {
        self.points.len() == HOURS_PER_DAY as usize
    }
}
