//! Styling system for UI elements
//!
//! - [`colors`] - Color constants plus page and chart palettes
//! - [`style`] - Style configuration and button variants
//! - [`theme`] - Palettes bundled per light/dark mode

pub mod colors;
pub mod style;
pub mod theme;

pub use colors::{BLACK, ChartPalette, ColorPalette, WHITE};
pub use style::{ButtonVariant, Style};
pub use theme::Theme;
