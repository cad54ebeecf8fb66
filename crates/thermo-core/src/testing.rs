//! In-memory draw target for rendering tests

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Framebuffer that records every pixel written to it
pub(crate) struct Canvas {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub(crate) fn new(size: Size, background: Rgb565) -> Self {
        Self {
            size,
            pixels: vec![background; (size.width * size.height) as usize],
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0
            || point.y < 0
            || point.x >= self.size.width as i32
            || point.y >= self.size.height as i32
        {
            return None;
        }
        Some(point.y as usize * self.size.width as usize + point.x as usize)
    }

    pub(crate) fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Number of pixels with exactly `color`
    pub(crate) fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Number of pixels with `color` inside `area`
    pub(crate) fn count_in(&self, area: Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|p| self.pixel(*p) == Some(color))
            .count()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
