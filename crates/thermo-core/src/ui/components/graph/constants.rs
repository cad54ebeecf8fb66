//! Constants for graph rendering

use embedded_graphics::pixelcolor::Rgb565;

use crate::ui::styling::colors::GRID_LIGHT;

/// Number of line segments per sample interval for smooth curves
pub const DEFAULT_SMOOTH_SUBDIVISIONS: usize = 8;

/// Default grid line color
pub const DEFAULT_GRID_COLOR: Rgb565 = GRID_LIGHT;

/// Default grid line width in pixels
pub const DEFAULT_GRID_LINE_WIDTH_PX: u32 = 1;

/// Dash and gap length of the default dashed style, in pixels
pub const DEFAULT_DASH_LENGTH_PX: u32 = 3;

/// Default number of horizontal grid lines / Y-axis ticks
pub const DEFAULT_Y_TICK_COUNT: usize = 5;

/// Default X-axis tick spacing in data units (hours)
pub const DEFAULT_X_TICK_STEP: f32 = 3.0;

/// Upper bound on ticks per axis
pub const MAX_TICKS: usize = 32;

/// Maximum length of formatted axis labels (bytes)
pub const MAX_AXIS_LABEL_LENGTH: usize = 16;

/// Maximum length of a reference line label (bytes)
pub const MAX_REFERENCE_LABEL_LENGTH: usize = 32;

/// Maximum length of an axis title (bytes)
pub const MAX_AXIS_TITLE_LENGTH: usize = 24;

/// Gap between the plot area and axis tick labels in pixels
pub const AXIS_LABEL_GAP_PX: i32 = 4;

/// Default viewport padding for top edge in pixels
pub const DEFAULT_VIEWPORT_PADDING_TOP_PX: u32 = 6;

/// Default viewport padding for right edge in pixels
pub const DEFAULT_VIEWPORT_PADDING_RIGHT_PX: u32 = 10;

/// Default viewport padding for bottom edge in pixels
pub const DEFAULT_VIEWPORT_PADDING_BOTTOM_PX: u32 = 28;

/// Default viewport padding for left edge in pixels
pub const DEFAULT_VIEWPORT_PADDING_LEFT_PX: u32 = 44;

/// Minimum data range for auto-scaling (prevents division by zero)
pub const MIN_DATA_RANGE: f32 = 0.001;

/// Margin factor for auto-scaling bounds (10% padding)
pub const AUTO_SCALE_MARGIN_FACTOR: f32 = 0.1;

/// Default series line width in pixels
pub const DEFAULT_SERIES_LINE_WIDTH_PX: u32 = 2;

/// Diameter of the data point markers in pixels
pub const POINT_MARKER_DIAMETER_PX: u32 = 5;
