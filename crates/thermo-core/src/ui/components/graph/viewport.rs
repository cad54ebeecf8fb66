//! Viewport and coordinate transformation utilities
//!
//! Handles transformation between data space (hours, °C) and screen space
//! (pixel coordinates).

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::constants::{
    DEFAULT_VIEWPORT_PADDING_BOTTOM_PX, DEFAULT_VIEWPORT_PADDING_LEFT_PX,
    DEFAULT_VIEWPORT_PADDING_RIGHT_PX, DEFAULT_VIEWPORT_PADDING_TOP_PX, MIN_DATA_RANGE,
};
use super::series::DataPoint;

/// Data space bounds (min/max x and y values)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl DataBounds {
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Calculate bounds from data points with a relative margin on each side
    pub fn from_points<'a, I>(points: I, margin_factor: f32) -> Option<Self>
    where
        I: IntoIterator<Item = &'a DataPoint>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;

        let mut x_min = first.x;
        let mut x_max = first.x;
        let mut y_min = first.y;
        let mut y_max = first.y;

        for point in points {
            x_min = x_min.min(point.x);
            x_max = x_max.max(point.x);
            y_min = y_min.min(point.y);
            y_max = y_max.max(point.y);
        }

        let x_margin = (x_max - x_min).max(MIN_DATA_RANGE) * margin_factor;
        let y_margin = (y_max - y_min).max(MIN_DATA_RANGE) * margin_factor;

        Some(Self {
            x_min: x_min - x_margin,
            x_max: x_max + x_margin,
            y_min: y_min - y_margin,
            y_max: y_max + y_margin,
        })
    }

    pub fn x_range(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn y_range(&self) -> f32 {
        self.y_max - self.y_min
    }
}

/// Padding around the plot area for labels and margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportPadding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for ViewportPadding {
    fn default() -> Self {
        Self {
            top: DEFAULT_VIEWPORT_PADDING_TOP_PX,
            right: DEFAULT_VIEWPORT_PADDING_RIGHT_PX,
            bottom: DEFAULT_VIEWPORT_PADDING_BOTTOM_PX,
            left: DEFAULT_VIEWPORT_PADDING_LEFT_PX,
        }
    }
}

impl ViewportPadding {
    pub const fn uniform(padding: u32) -> Self {
        Self {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        }
    }

    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Viewport for transforming data coordinates to screen coordinates
#[derive(Debug, Clone)]
pub struct Viewport {
    data_bounds: DataBounds,
    /// Full area including padding
    screen_bounds: Rectangle,
    padding: ViewportPadding,
}

impl Viewport {
    pub fn new(data_bounds: DataBounds, screen_bounds: Rectangle) -> Self {
        Self {
            data_bounds,
            screen_bounds,
            padding: ViewportPadding::default(),
        }
    }

    pub fn with_padding(mut self, padding: ViewportPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Get the plot area (screen bounds minus padding)
    pub fn plot_area(&self) -> Rectangle {
        let top_left = Point::new(
            self.screen_bounds.top_left.x + self.padding.left as i32,
            self.screen_bounds.top_left.y + self.padding.top as i32,
        );

        let width = self
            .screen_bounds
            .size
            .width
            .saturating_sub(self.padding.left + self.padding.right);
        let height = self
            .screen_bounds
            .size
            .height
            .saturating_sub(self.padding.top + self.padding.bottom);

        Rectangle::new(top_left, Size::new(width, height))
    }

    /// Screen x for a data x value, without bounds checks
    pub fn x_to_screen(&self, x: f32) -> i32 {
        let plot_area = self.plot_area();
        let x_norm = (x - self.data_bounds.x_min) / self.data_bounds.x_range();
        plot_area.top_left.x + libm::roundf(x_norm * plot_area.size.width as f32) as i32
    }

    /// Screen y for a data y value, without bounds checks
    ///
    /// Screen y increases downward, so larger values map higher up.
    pub fn y_to_screen(&self, y: f32) -> i32 {
        let plot_area = self.plot_area();
        let y_norm = (y - self.data_bounds.y_min) / self.data_bounds.y_range();
        plot_area.top_left.y + libm::roundf((1.0 - y_norm) * plot_area.size.height as f32) as i32
    }

    /// Data x for a screen x, the inverse of [`Viewport::x_to_screen`]
    pub fn screen_to_x(&self, screen_x: i32) -> f32 {
        let plot_area = self.plot_area();
        let width = plot_area.size.width.max(1) as f32;
        let x_norm = (screen_x - plot_area.top_left.x) as f32 / width;
        self.data_bounds.x_min + x_norm * self.data_bounds.x_range()
    }

    /// Transform a data point to screen coordinates
    ///
    /// Returns None if the point falls outside the plot area
    pub fn data_to_screen(&self, point: DataPoint) -> Option<Point> {
        let x_norm = (point.x - self.data_bounds.x_min) / self.data_bounds.x_range();
        let y_norm = (point.y - self.data_bounds.y_min) / self.data_bounds.y_range();

        if !x_norm.is_finite() || !y_norm.is_finite() {
            return None;
        }

        let plot_area = self.plot_area();
        let screen_x = self.x_to_screen(point.x);
        let screen_y = self.y_to_screen(point.y);

        if screen_x < plot_area.top_left.x
            || screen_x > plot_area.top_left.x + plot_area.size.width as i32
            || screen_y < plot_area.top_left.y
            || screen_y > plot_area.top_left.y + plot_area.size.height as i32
        {
            return None;
        }

        Some(Point::new(screen_x, screen_y))
    }

    pub fn data_bounds(&self) -> &DataBounds {
        &self.data_bounds
    }

    pub fn screen_bounds(&self) -> Rectangle {
        self.screen_bounds
    }

    pub fn padding(&self) -> &ViewportPadding {
        &self.padding
    }

    pub fn set_data_bounds(&mut self, bounds: DataBounds) {
        self.data_bounds = bounds;
    }
}
