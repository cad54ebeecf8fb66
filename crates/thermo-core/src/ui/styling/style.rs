//! Style configuration for UI elements

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::colors::ColorPalette;

/// Visual style of a filled, optionally bordered element
///
/// ```ignore
/// let card = Style::new()
///     .with_background(palette.surface)
///     .with_border(palette.border, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,
    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,
    /// Border color (if any)
    pub border_color: Option<Rgb565>,
    /// Border width in pixels (0 = no border)
    pub border_width: u32,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the border color and width; a width of 0 disables the border
    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Converts this style to a `PrimitiveStyle` for embedded-graphics drawing
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder.stroke_color(border).stroke_width(self.border_width);
        }

        builder.build()
    }
}

/// Predefined button looks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Filled with the palette's primary color, used for the main action
    Primary,
    /// Surface background with a border
    Outline,
}

impl ButtonVariant {
    /// Concrete style for this variant under `palette`
    pub fn to_style(&self, palette: &ColorPalette) -> Style {
        match self {
            ButtonVariant::Primary => Style::new()
                .with_background(palette.primary)
                .with_foreground(palette.on_primary),

            ButtonVariant::Outline => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_primary)
                .with_border(palette.border, 1),
        }
    }
}
