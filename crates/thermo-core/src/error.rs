//! Error types for the temperature model and configuration

use thiserror_no_std::Error;

/// Errors raised while building a [`Series`](crate::model::Series) from
/// caller-supplied points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Sample hour is not a valid hour of day
    #[error("Hour {hour} is outside 0..=23")]
    HourOutOfRange {
        /// The rejected hour
        hour: u8,
    },

    /// Two samples share the same hour
    #[error("Duplicate sample for hour {hour}")]
    DuplicateHour {
        /// The repeated hour
        hour: u8,
    },
}

/// Errors raised while validating a
/// [`DashboardConfig`](crate::config::DashboardConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Initial hour selection is not a valid hour of day
    #[error("Selected hour {hour} is outside 0..=23")]
    InvalidSelectedHour {
        /// The rejected hour
        hour: u8,
    },
}
