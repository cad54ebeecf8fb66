//! Color definitions and palettes
//!
//! All colors are RGB565. To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Pure white
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Light theme surface (zinc-100)
pub const LIGHT_SURFACE: Rgb565 = Rgb565::new(244 >> 3, 244 >> 2, 245 >> 3);

/// Light theme border (zinc-300)
pub const LIGHT_BORDER: Rgb565 = Rgb565::new(212 >> 3, 212 >> 2, 216 >> 3);

/// Light theme secondary text (neutral-600)
pub const LIGHT_TEXT_SECONDARY: Rgb565 = Rgb565::new(82 >> 3, 82 >> 2, 82 >> 3);

/// Light theme accent (zinc-900)
pub const LIGHT_ACCENT: Rgb565 = Rgb565::new(24 >> 3, 24 >> 2, 27 >> 3);

/// Dark theme background (slate-900)
pub const DARK_BACKGROUND: Rgb565 = Rgb565::new(15 >> 3, 23 >> 2, 42 >> 3);

/// Dark theme surface (slate-800)
pub const DARK_SURFACE: Rgb565 = Rgb565::new(30 >> 3, 41 >> 2, 59 >> 3);

/// Dark theme border (slate-700)
pub const DARK_BORDER: Rgb565 = Rgb565::new(51 >> 3, 65 >> 2, 85 >> 3);

/// Dark theme secondary text (slate-400)
pub const DARK_TEXT_SECONDARY: Rgb565 = Rgb565::new(148 >> 3, 163 >> 2, 184 >> 3);

/// Dark theme accent (slate-50)
pub const DARK_ACCENT: Rgb565 = Rgb565::new(248 >> 3, 250 >> 2, 252 >> 3);

// ============================================================================
// Chart Colors
// ============================================================================

/// Local temperature line, light theme (#2196f3)
pub const LOCAL_LIGHT: Rgb565 = Rgb565::new(0x21 >> 3, 0x96 >> 2, 0xf3 >> 3);

/// Local temperature line, dark theme (#64b5f6)
pub const LOCAL_DARK: Rgb565 = Rgb565::new(0x64 >> 3, 0xb5 >> 2, 0xf6 >> 3);

/// Battery temperature line, light theme (#4caf50)
pub const BATTERY_LIGHT: Rgb565 = Rgb565::new(0x4c >> 3, 0xaf >> 2, 0x50 >> 3);

/// Battery temperature line, dark theme (#81c784)
pub const BATTERY_DARK: Rgb565 = Rgb565::new(0x81 >> 3, 0xc7 >> 2, 0x84 >> 3);

/// Ambient reference line, light theme (#f50057)
pub const AMBIENT_LIGHT: Rgb565 = Rgb565::new(0xf5 >> 3, 0x00 >> 2, 0x57 >> 3);

/// Ambient reference line, dark theme (#ff4081)
pub const AMBIENT_DARK: Rgb565 = Rgb565::new(0xff >> 3, 0x40 >> 2, 0x81 >> 3);

/// Grid lines, light theme (#e5e5e5)
pub const GRID_LIGHT: Rgb565 = Rgb565::new(0xe5 >> 3, 0xe5 >> 2, 0xe5 >> 3);

/// Grid lines, dark theme (#333333)
pub const GRID_DARK: Rgb565 = Rgb565::new(0x33 >> 3, 0x33 >> 2, 0x33 >> 3);

// ============================================================================
// Palettes
// ============================================================================

/// Colors for page chrome: backgrounds, panels, text and buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Filled button background
    pub primary: Rgb565,
    /// Text drawn on a `primary` background
    pub on_primary: Rgb565,
    /// Page background
    pub background: Rgb565,
    /// Cards, panels and outline buttons
    pub surface: Rgb565,
    /// High-contrast text
    pub text_primary: Rgb565,
    /// Lower-contrast text for captions and hints
    pub text_secondary: Rgb565,
    /// Separators and outlines
    pub border: Rgb565,
}

impl ColorPalette {
    pub const fn light() -> Self {
        Self {
            primary: LIGHT_ACCENT,
            on_primary: WHITE,
            background: WHITE,
            surface: LIGHT_SURFACE,
            text_primary: BLACK,
            text_secondary: LIGHT_TEXT_SECONDARY,
            border: LIGHT_BORDER,
        }
    }

    pub const fn dark() -> Self {
        Self {
            primary: DARK_ACCENT,
            on_primary: DARK_BACKGROUND,
            background: DARK_BACKGROUND,
            surface: DARK_SURFACE,
            text_primary: WHITE,
            text_secondary: DARK_TEXT_SECONDARY,
            border: DARK_BORDER,
        }
    }
}

/// Colors for the chart itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    /// Local temperature series
    pub local: Rgb565,
    /// Battery temperature series
    pub battery: Rgb565,
    /// Ambient reference line
    pub ambient: Rgb565,
    /// Grid lines
    pub grid: Rgb565,
}

impl ChartPalette {
    pub const fn light() -> Self {
        Self {
            local: LOCAL_LIGHT,
            battery: BATTERY_LIGHT,
            ambient: AMBIENT_LIGHT,
            grid: GRID_LIGHT,
        }
    }

    pub const fn dark() -> Self {
        Self {
            local: LOCAL_DARK,
            battery: BATTERY_DARK,
            ambient: AMBIENT_DARK,
            grid: GRID_DARK,
        }
    }
}
