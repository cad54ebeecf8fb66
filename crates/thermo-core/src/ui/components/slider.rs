//! Horizontal hour slider

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
};

use crate::model::MAX_HOUR;
use crate::state::DashboardAction;
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::ColorPalette;

const KNOB_DIAMETER_PX: u32 = 12;
const TRACK_HEIGHT_PX: u32 = 4;

/// Slider selecting an hour in `0..=23`
///
/// A press or drag anywhere inside the bounds moves the knob to the nearest
/// hour and yields [`DashboardAction::SelectHour`].
#[derive(Debug, Clone)]
pub struct HourSlider {
    bounds: Rectangle,
    hour: u8,
    palette: ColorPalette,
    dirty: bool,
}

impl HourSlider {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            hour: 0,
            palette: ColorPalette::light(),
            dirty: true,
        }
    }

    pub fn set_palette(&mut self, palette: ColorPalette) {
        if self.palette != palette {
            self.palette = palette;
            self.dirty = true;
        }
    }

    pub fn set_hour(&mut self, hour: u8) {
        let hour = hour.min(MAX_HOUR);
        if self.hour != hour {
            self.hour = hour;
            self.dirty = true;
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Horizontal extent the knob center can travel: `(left, width)`
    fn track_span(&self) -> (i32, i32) {
        let inset = (KNOB_DIAMETER_PX / 2) as i32;
        let width = (self.bounds.size.width as i32 - 2 * inset).max(1);
        (self.bounds.top_left.x + inset, width)
    }

    /// Nearest hour for a screen x position, clamped to the track ends
    pub fn hour_at(&self, x: i32) -> u8 {
        let (left, width) = self.track_span();
        let fraction = ((x - left) as f32 / width as f32).clamp(0.0, 1.0);
        libm::roundf(fraction * MAX_HOUR as f32) as u8
    }

    /// Screen position of the knob center for the current hour
    pub fn knob_center(&self) -> Point {
        let (left, width) = self.track_span();
        let offset = libm::roundf(self.hour as f32 * width as f32 / MAX_HOUR as f32) as i32;
        Point::new(left + offset, self.bounds.center().y)
    }
}

impl Drawable for HourSlider {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let (left, width) = self.track_span();
        let knob = self.knob_center();
        let track_top = knob.y - (TRACK_HEIGHT_PX / 2) as i32;
        let radius = Size::new(TRACK_HEIGHT_PX / 2, TRACK_HEIGHT_PX / 2);

        let track = Rectangle::new(
            Point::new(left, track_top),
            Size::new(width as u32, TRACK_HEIGHT_PX),
        );
        RoundedRectangle::with_equal_corners(track, radius)
            .into_styled(PrimitiveStyle::with_fill(self.palette.border))
            .draw(display)?;

        // Filled portion up to the knob
        let filled = Rectangle::new(
            Point::new(left, track_top),
            Size::new((knob.x - left).max(0) as u32, TRACK_HEIGHT_PX),
        );
        if filled.size.width > 0 {
            RoundedRectangle::with_equal_corners(filled, radius)
                .into_styled(PrimitiveStyle::with_fill(self.palette.primary))
                .draw(display)?;
        }

        let knob_style = PrimitiveStyleBuilder::new()
            .fill_color(self.palette.primary)
            .stroke_color(self.palette.background)
            .stroke_width(2)
            .build();
        Circle::with_center(knob, KNOB_DIAMETER_PX)
            .into_styled(knob_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for HourSlider {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let point = event.point();
        if !self.contains_point(point) {
            return TouchResult::NotHandled;
        }

        TouchResult::Action(DashboardAction::SelectHour(self.hour_at(point.x as i32)))
    }
}
