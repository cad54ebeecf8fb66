//! Data series types for graph rendering

extern crate alloc;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

use super::constants::DEFAULT_SERIES_LINE_WIDTH_PX;
use super::{GraphError, GraphResult};

/// A single data point with x and y coordinates
///
/// On the dashboard x is the hour of day and y a temperature in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f32,
    pub y: f32,
}

impl DataPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Interpolation type for rendering series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationType {
    /// Straight lines between points
    Linear,
    /// Monotone cubic through every point; never overshoots between samples
    Monotone,
    /// Hold each value until the next point, then jump (step-after)
    Stepped,
}

/// Visual style configuration for a data series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Line color
    pub color: Rgb565,
    /// Line width in pixels
    pub line_width: u32,
    /// Whether to draw dots at data points
    pub show_points: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: Rgb565::WHITE,
            line_width: DEFAULT_SERIES_LINE_WIDTH_PX,
            show_points: false,
        }
    }
}

/// A data series containing points, style, and interpolation settings
///
/// Points are expected in ascending x order.
#[derive(Debug, Clone)]
pub struct DataSeries<const MAX_POINTS: usize> {
    pub(super) points: Vec<DataPoint>,
    pub(super) style: SeriesStyle,
    pub(super) interpolation: InterpolationType,
}

impl<const MAX_POINTS: usize> DataSeries<MAX_POINTS> {
    /// Create an empty data series
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(MAX_POINTS),
            style: SeriesStyle::default(),
            interpolation: InterpolationType::Linear,
        }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    /// Push a data point to the series
    ///
    /// Returns error if series is at capacity
    pub fn push(&mut self, point: DataPoint) -> GraphResult<()> {
        if self.points.len() >= MAX_POINTS {
            return Err(GraphError::PointCapacityExceeded { max: MAX_POINTS });
        }

        self.points.push(point);
        Ok(())
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }

    pub fn interpolation(&self) -> InterpolationType {
        self.interpolation
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl<const MAX_POINTS: usize> Default for DataSeries<MAX_POINTS> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collection of multiple data series
#[derive(Debug, Clone)]
pub struct SeriesCollection<const MAX_SERIES: usize, const MAX_POINTS: usize> {
    pub(super) series: Vec<DataSeries<MAX_POINTS>>,
}

impl<const MAX_SERIES: usize, const MAX_POINTS: usize> SeriesCollection<MAX_SERIES, MAX_POINTS> {
    pub fn new() -> Self {
        Self {
            series: Vec::with_capacity(MAX_SERIES),
        }
    }

    /// Add a series to the collection
    ///
    /// Returns the new series index, or an error if at capacity
    pub fn add(&mut self, series: DataSeries<MAX_POINTS>) -> GraphResult<usize> {
        let index = self.series.len();
        if index >= MAX_SERIES {
            return Err(GraphError::SeriesCapacityExceeded { max: MAX_SERIES });
        }

        self.series.push(series);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&DataSeries<MAX_POINTS>> {
        self.series.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DataSeries<MAX_POINTS>> {
        self.series.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSeries<MAX_POINTS>> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<const MAX_SERIES: usize, const MAX_POINTS: usize> Default
    for SeriesCollection<MAX_SERIES, MAX_POINTS>
{
    fn default() -> Self {
        Self::new()
    }
}
