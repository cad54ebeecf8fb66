//! Grid line rendering for graph backgrounds
//!
//! Grid lines follow the axis ticks, so a vertical line sits under every
//! X-axis label and a horizontal line beside every Y-axis label.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use super::axis::AxisTicks;
use super::constants::{
    DEFAULT_DASH_LENGTH_PX, DEFAULT_GRID_COLOR, DEFAULT_GRID_LINE_WIDTH_PX, DEFAULT_X_TICK_STEP,
    DEFAULT_Y_TICK_COUNT,
};
use super::viewport::Viewport;

/// Line style for grid and reference lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    /// Solid continuous line
    Solid,
    /// Dashed line with specified dash and gap lengths
    Dashed {
        /// Length of each dash in pixels
        dash_length: u32,
        /// Length of gap between dashes in pixels
        gap_length: u32,
    },
}

impl LineStyle {
    /// Equal 3px dashes and gaps
    pub const fn dashed() -> Self {
        LineStyle::Dashed {
            dash_length: DEFAULT_DASH_LENGTH_PX,
            gap_length: DEFAULT_DASH_LENGTH_PX,
        }
    }
}

/// One family of grid lines (all vertical or all horizontal)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLines {
    /// Positions, in the data units of the matching axis
    pub ticks: AxisTicks,
    /// Line color
    pub color: Rgb565,
    /// Line width in pixels
    pub width: u32,
    /// Line style (solid or dashed)
    pub style: LineStyle,
}

impl GridLines {
    pub fn vertical() -> Self {
        Self {
            ticks: AxisTicks::Every(DEFAULT_X_TICK_STEP),
            color: DEFAULT_GRID_COLOR,
            width: DEFAULT_GRID_LINE_WIDTH_PX,
            style: LineStyle::dashed(),
        }
    }

    pub fn horizontal() -> Self {
        Self {
            ticks: AxisTicks::Count(DEFAULT_Y_TICK_COUNT),
            ..Self::vertical()
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }
}

/// Complete grid configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Vertical grid lines (None = no vertical lines)
    pub vertical_lines: Option<GridLines>,
    /// Horizontal grid lines (None = no horizontal lines)
    pub horizontal_lines: Option<GridLines>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            vertical_lines: Some(GridLines::vertical()),
            horizontal_lines: Some(GridLines::horizontal()),
        }
    }
}

impl GridConfig {
    /// No grid lines at all
    pub const fn none() -> Self {
        Self {
            vertical_lines: None,
            horizontal_lines: None,
        }
    }

    /// Dashed lines on both axes in `color`
    pub fn dashed(color: Rgb565) -> Self {
        Self {
            vertical_lines: Some(GridLines::vertical().with_color(color)),
            horizontal_lines: Some(GridLines::horizontal().with_color(color)),
        }
    }
}

/// Draw grid lines on the graph
pub(super) fn draw_grid<D: DrawTarget<Color = Rgb565>>(
    config: &GridConfig,
    viewport: &Viewport,
    display: &mut D,
) -> Result<(), D::Error> {
    let plot_area = viewport.plot_area();
    let bounds = viewport.data_bounds();
    let top = plot_area.top_left.y;
    let bottom = top + plot_area.size.height as i32;
    let left = plot_area.top_left.x;
    let right = left + plot_area.size.width as i32;

    if let Some(ref vlines) = config.vertical_lines {
        for value in vlines.ticks.values(bounds.x_min, bounds.x_max) {
            let x = viewport.x_to_screen(value);
            draw_line(
                Point::new(x, top),
                Point::new(x, bottom),
                vlines.color,
                vlines.width,
                vlines.style,
                display,
            )?;
        }
    }

    if let Some(ref hlines) = config.horizontal_lines {
        for value in hlines.ticks.values(bounds.y_min, bounds.y_max) {
            let y = viewport.y_to_screen(value);
            draw_line(
                Point::new(left, y),
                Point::new(right, y),
                hlines.color,
                hlines.width,
                hlines.style,
                display,
            )?;
        }
    }

    Ok(())
}

/// Draw a single line with specified style
pub(super) fn draw_line<D: DrawTarget<Color = Rgb565>>(
    start: Point,
    end: Point,
    color: Rgb565,
    width: u32,
    style: LineStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    match style {
        LineStyle::Solid => {
            Line::new(start, end)
                .into_styled(PrimitiveStyle::with_stroke(color, width))
                .draw(display)?;
        }
        LineStyle::Dashed {
            dash_length,
            gap_length,
        } => {
            draw_dashed_line(start, end, color, width, dash_length, gap_length, display)?;
        }
    }

    Ok(())
}

/// Draw a dashed line by rendering individual dash segments
fn draw_dashed_line<D: DrawTarget<Color = Rgb565>>(
    start: Point,
    end: Point,
    color: Rgb565,
    width: u32,
    dash_length: u32,
    gap_length: u32,
    display: &mut D,
) -> Result<(), D::Error> {
    let dx = (end.x - start.x) as f32;
    let dy = (end.y - start.y) as f32;
    let total_length = libm::sqrtf(dx * dx + dy * dy);

    if total_length < 0.1 {
        return Ok(());
    }

    let dash = dash_length.max(1) as f32;
    let pattern_length = dash + gap_length as f32;
    let line_style = PrimitiveStyle::with_stroke(color, width);
    let mut distance = 0.0;

    while distance < total_length {
        // A 1px dash covers one pixel, so the segment spans dash - 1
        let t_start = distance / total_length;
        let t_end = (distance + dash - 1.0).min(total_length) / total_length;

        let dash_start = Point::new(
            start.x + libm::roundf(dx * t_start) as i32,
            start.y + libm::roundf(dy * t_start) as i32,
        );
        let dash_end = Point::new(
            start.x + libm::roundf(dx * t_end) as i32,
            start.y + libm::roundf(dy * t_end) as i32,
        );

        Line::new(dash_start, dash_end)
            .into_styled(line_style)
            .draw(display)?;

        distance += pattern_length;
    }

    Ok(())
}
