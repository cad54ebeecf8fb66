//! Axis configuration, tick placement and label rendering

use core::fmt::Write;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, iso_8859_1::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::{String, Vec};

use crate::model::{TemperatureUnit, to_display_unit};
use crate::ui::styling::colors::LIGHT_TEXT_SECONDARY;

use super::constants::{
    AXIS_LABEL_GAP_PX, DEFAULT_X_TICK_STEP, DEFAULT_Y_TICK_COUNT, MAX_AXIS_LABEL_LENGTH,
    MAX_AXIS_TITLE_LENGTH, MAX_TICKS,
};
use super::viewport::Viewport;

/// Where ticks (and the grid lines that follow them) are placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisTicks {
    /// `n` evenly spaced ticks from the axis minimum to its maximum
    Count(usize),
    /// A tick at every multiple of `step` inside the axis range
    Every(f32),
}

impl AxisTicks {
    /// Data values of the ticks inside `[min, max]`, ascending
    pub fn values(&self, min: f32, max: f32) -> Vec<f32, MAX_TICKS> {
        let mut values = Vec::new();
        if !(max - min).is_finite() || max <= min {
            return values;
        }

        match *self {
            AxisTicks::Count(0) => {}
            AxisTicks::Count(1) => {
                let _ = values.push((min + max) / 2.0);
            }
            AxisTicks::Count(count) => {
                let last = (count - 1) as f32;
                for i in 0..count.min(MAX_TICKS) {
                    let _ = values.push(min + (max - min) * i as f32 / last);
                }
            }
            AxisTicks::Every(step) if step > 0.0 => {
                let mut k = libm::ceilf(min / step);
                while k * step <= max + f32::EPSILON {
                    if values.push(k * step).is_err() {
                        break;
                    }
                    k += 1.0;
                }
            }
            AxisTicks::Every(_) => {}
        }

        values
    }
}

/// Label formatter for axis values
#[derive(Debug, Clone, Copy)]
pub enum LabelFormatter {
    /// Hour of day, e.g. `6:00`
    Hour,
    /// Celsius value shown in `unit`, e.g. `68°F`
    Temperature {
        /// Display unit
        unit: TemperatureUnit,
        /// Number of decimal places (0 or 1)
        precision: usize,
    },
}

impl LabelFormatter {
    /// Format one tick value
    pub fn format(&self, value: f32) -> String<MAX_AXIS_LABEL_LENGTH> {
        let mut s = String::new();
        match self {
            LabelFormatter::Hour => {
                let _ = write!(s, "{}:00", libm::roundf(value) as i32);
            }
            LabelFormatter::Temperature { unit, precision } => {
                let shown = to_display_unit(value, *unit);
                if *precision == 0 {
                    let _ = write!(s, "{:.0}{}", shown, unit.symbol());
                } else {
                    let _ = write!(s, "{:.1}{}", shown, unit.symbol());
                }
            }
        }
        s
    }
}

/// X-axis configuration
#[derive(Clone)]
pub struct XAxisConfig {
    /// Tick placement
    pub ticks: AxisTicks,
    /// Label formatter
    pub label_formatter: LabelFormatter,
    /// Text style for labels
    pub label_style: MonoTextStyle<'static, Rgb565>,
    /// Title centered below the labels
    pub title: Option<String<MAX_AXIS_TITLE_LENGTH>>,
    /// Whether to show the axis line
    pub show_axis_line: bool,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            ticks: AxisTicks::Every(DEFAULT_X_TICK_STEP),
            label_formatter: LabelFormatter::Hour,
            label_style: MonoTextStyle::new(&FONT_6X10, LIGHT_TEXT_SECONDARY),
            title: None,
            show_axis_line: true,
        }
    }
}

/// Y-axis configuration
#[derive(Clone)]
pub struct YAxisConfig {
    /// Tick placement
    pub ticks: AxisTicks,
    /// Label formatter
    pub label_formatter: LabelFormatter,
    /// Text style for labels
    pub label_style: MonoTextStyle<'static, Rgb565>,
    /// Title drawn above the labels, at the top-left of the graph
    pub title: Option<String<MAX_AXIS_TITLE_LENGTH>>,
    /// Whether to show the axis line
    pub show_axis_line: bool,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            ticks: AxisTicks::Count(DEFAULT_Y_TICK_COUNT),
            label_formatter: LabelFormatter::Temperature {
                unit: TemperatureUnit::Celsius,
                precision: 0,
            },
            label_style: MonoTextStyle::new(&FONT_6X10, LIGHT_TEXT_SECONDARY),
            title: None,
            show_axis_line: true,
        }
    }
}

/// Complete axis configuration
#[derive(Clone, Default)]
pub struct AxisConfig {
    pub x_axis: Option<XAxisConfig>,
    pub y_axis: Option<YAxisConfig>,
}

/// Build an axis title, truncating anything past the capacity
pub fn axis_title(text: &str) -> String<MAX_AXIS_TITLE_LENGTH> {
    let mut title = String::new();
    for c in text.chars() {
        if title.push(c).is_err() {
            break;
        }
    }
    title
}

fn axis_line_color(style: &MonoTextStyle<'static, Rgb565>) -> Rgb565 {
    style.text_color.unwrap_or(LIGHT_TEXT_SECONDARY)
}

/// Draw X-axis line, tick labels and title below the plot area
pub(super) fn draw_x_axis<D: DrawTarget<Color = Rgb565>>(
    config: &XAxisConfig,
    viewport: &Viewport,
    display: &mut D,
) -> Result<(), D::Error> {
    let plot_area = viewport.plot_area();
    let bounds = viewport.data_bounds();
    let axis_y = plot_area.top_left.y + plot_area.size.height as i32;

    if config.show_axis_line {
        Line::new(
            Point::new(plot_area.top_left.x, axis_y),
            Point::new(plot_area.top_left.x + plot_area.size.width as i32, axis_y),
        )
        .into_styled(PrimitiveStyle::with_stroke(axis_line_color(&config.label_style), 1))
        .draw(display)?;
    }

    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    let label_y = axis_y + AXIS_LABEL_GAP_PX;

    for value in config.ticks.values(bounds.x_min, bounds.x_max) {
        let label = config.label_formatter.format(value);
        Text::with_text_style(
            label.as_str(),
            Point::new(viewport.x_to_screen(value), label_y),
            config.label_style,
            text_style,
        )
        .draw(display)?;
    }

    if let Some(title) = &config.title {
        let title_y = label_y + config.label_style.font.character_size.height as i32 + 1;
        Text::with_text_style(
            title.as_str(),
            Point::new(plot_area.center().x, title_y),
            config.label_style,
            text_style,
        )
        .draw(display)?;
    }

    Ok(())
}

/// Draw Y-axis line, tick labels and title left of the plot area
pub(super) fn draw_y_axis<D: DrawTarget<Color = Rgb565>>(
    config: &YAxisConfig,
    viewport: &Viewport,
    display: &mut D,
) -> Result<(), D::Error> {
    let plot_area = viewport.plot_area();
    let bounds = viewport.data_bounds();
    let axis_x = plot_area.top_left.x;

    if config.show_axis_line {
        Line::new(
            Point::new(axis_x, plot_area.top_left.y),
            Point::new(axis_x, plot_area.top_left.y + plot_area.size.height as i32),
        )
        .into_styled(PrimitiveStyle::with_stroke(axis_line_color(&config.label_style), 1))
        .draw(display)?;
    }

    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Right)
        .baseline(Baseline::Middle)
        .build();

    for value in config.ticks.values(bounds.y_min, bounds.y_max) {
        let label = config.label_formatter.format(value);
        Text::with_text_style(
            label.as_str(),
            Point::new(axis_x - AXIS_LABEL_GAP_PX, viewport.y_to_screen(value)),
            config.label_style,
            text_style,
        )
        .draw(display)?;
    }

    if let Some(title) = &config.title {
        let screen = viewport.screen_bounds();
        Text::with_baseline(
            title.as_str(),
            Point::new(screen.top_left.x + AXIS_LABEL_GAP_PX, screen.top_left.y),
            config.label_style,
            Baseline::Top,
        )
        .draw(display)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_step_ticks_land_on_multiples() {
        let ticks = AxisTicks::Every(3.0).values(0.0, 23.0);
        assert_eq!(ticks.as_slice(), &[0.0, 3.0, 6.0, 9.0, 12.0, 15.0, 18.0, 21.0]);

        let ticks = AxisTicks::Every(5.0).values(12.3, 31.0);
        assert_eq!(ticks.as_slice(), &[15.0, 20.0, 25.0, 30.0]);
    }

    #[test]
    fn test_count_ticks_span_range() {
        let ticks = AxisTicks::Count(5).values(10.0, 30.0);
        assert_eq!(ticks.as_slice(), &[10.0, 15.0, 20.0, 25.0, 30.0]);
        assert!(AxisTicks::Count(0).values(0.0, 1.0).is_empty());
        assert!(AxisTicks::Count(3).values(1.0, 1.0).is_empty());
        assert!(AxisTicks::Every(0.0).values(0.0, 1.0).is_empty());
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(LabelFormatter::Hour.format(0.0).as_str(), "0:00");
        assert_eq!(LabelFormatter::Hour.format(21.0).as_str(), "21:00");
    }

    #[test]
    fn test_temperature_labels_follow_unit() {
        let celsius = LabelFormatter::Temperature {
            unit: TemperatureUnit::Celsius,
            precision: 0,
        };
        let fahrenheit = LabelFormatter::Temperature {
            unit: TemperatureUnit::Fahrenheit,
            precision: 1,
        };
        assert_eq!(celsius.format(20.0).as_str(), "20°C");
        assert_eq!(fahrenheit.format(20.0).as_str(), "68.0°F");
    }
}
