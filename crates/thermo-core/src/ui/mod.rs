//! Dashboard UI system
//!
//! - [`core`] - Drawable/touchable traits and touch events
//! - [`components`] - Buttons and the line chart
//! - [`styling`] - Colors, palettes and light/dark themes

pub mod components;
pub mod core;
pub mod styling;

pub use components::{Button, HourSlider};
pub use core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
pub use styling::{BLACK, ButtonVariant, ChartPalette, ColorPalette, Style, Theme, WHITE};

/// Display width in pixels
pub const DISPLAY_WIDTH_PX: u16 = 480;

/// Display height in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 320;
