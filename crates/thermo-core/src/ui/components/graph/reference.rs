//! Horizontal reference line with a label

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use super::constants::MAX_REFERENCE_LABEL_LENGTH;
use super::grid::{LineStyle, draw_line};
use super::viewport::Viewport;

/// A horizontal line across the plot area at a fixed y value
#[derive(Clone)]
pub struct ReferenceLine {
    /// Y value in data units
    pub value: f32,
    /// Line color
    pub color: Rgb565,
    /// Line width in pixels
    pub width: u32,
    /// Solid or dashed
    pub style: LineStyle,
    /// Text drawn just above the line at the right edge
    pub label: String<MAX_REFERENCE_LABEL_LENGTH>,
    /// Text style for the label
    pub label_style: MonoTextStyle<'static, Rgb565>,
}

/// Draw the reference line if its value lies inside the viewport
pub(super) fn draw_reference_line<D: DrawTarget<Color = Rgb565>>(
    line: &ReferenceLine,
    viewport: &Viewport,
    display: &mut D,
) -> Result<(), D::Error> {
    let bounds = viewport.data_bounds();
    if !(bounds.y_min..=bounds.y_max).contains(&line.value) {
        return Ok(());
    }

    let plot_area = viewport.plot_area();
    let y = viewport.y_to_screen(line.value);
    let left = plot_area.top_left.x;
    let right = left + plot_area.size.width as i32;

    draw_line(
        Point::new(left, y),
        Point::new(right, y),
        line.color,
        line.width,
        line.style,
        display,
    )?;

    if !line.label.is_empty() {
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Bottom)
            .build();

        Text::with_text_style(
            line.label.as_str(),
            Point::new(right - 2, y - 2),
            line.label_style,
            text_style,
        )
        .draw(display)?;
    }

    Ok(())
}
