//! Line chart rendering for the dashboard
//!
//! A small graph library drawn entirely with embedded-graphics primitives:
//!
//! - Linear, stepped and monotone cubic interpolation
//! - Multiple data series with independent styling and point markers
//! - Grid lines that follow the axis ticks, solid or dashed
//! - Auto-scaled Y axis with pluggable label formatters
//! - An optional labelled horizontal reference line
//!
//! # Memory Characteristics
//!
//! Capacity is fixed at compile time through const generics:
//! - `MAX_SERIES`: Maximum number of data series
//! - `MAX_POINTS`: Maximum points per series
//!
//! # Examples
//!
//! ```ignore
//! use thermo_core::ui::components::graph::*;
//! use embedded_graphics::prelude::*;
//!
//! let bounds = Rectangle::new(Point::new(0, 50), Size::new(480, 170));
//! let mut graph = Graph::<2, 24>::new(bounds).with_background(Rgb565::WHITE);
//!
//! let series = DataSeries::new().with_style(SeriesStyle {
//!     color: Rgb565::BLUE,
//!     line_width: 2,
//!     show_points: true,
//! });
//!
//! let local = graph.add_series(series)?;
//! graph.set_series_interpolation(local, InterpolationType::Monotone)?;
//! graph.set_series_points(local, &[DataPoint::new(0.0, 21.5), DataPoint::new(1.0, 21.0)])?;
//! graph.set_x_bounds(0.0, 23.0)?;
//! ```

use thiserror_no_std::Error;

mod axis;
mod component;
pub mod constants;
mod grid;
mod interpolation;
mod reference;
pub mod series;
pub mod viewport;

pub use axis::{AxisConfig, AxisTicks, LabelFormatter, XAxisConfig, YAxisConfig, axis_title};
pub use component::Graph;
pub use grid::{GridConfig, GridLines, LineStyle};
pub use reference::ReferenceLine;
pub use series::{DataPoint, DataSeries, InterpolationType, SeriesCollection, SeriesStyle};
pub use viewport::{DataBounds, Viewport, ViewportPadding};

/// Error types for graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// Series capacity exceeded
    #[error("Series capacity exceeded (max: {max})")]
    SeriesCapacityExceeded {
        /// Maximum allowed series count
        max: usize,
    },

    /// Point capacity exceeded for a series
    #[error("Point capacity exceeded (max: {max})")]
    PointCapacityExceeded {
        /// Maximum allowed points per series
        max: usize,
    },

    #[error("Invalid data bounds (min >= max)")]
    InvalidDataBounds,

    #[error("No data points available")]
    NoData,

    #[error("Invalid series index: {index}")]
    InvalidSeriesIndex {
        /// The invalid index
        index: usize,
    },
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
