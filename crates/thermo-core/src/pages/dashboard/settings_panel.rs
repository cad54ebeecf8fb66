//! Settings overlay listing unit, gridlines and chart style

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::state::{DashboardAction, Settings};
use crate::ui::core::{Drawable, TouchPoint, Touchable};
use crate::ui::{Button, ButtonVariant, ColorPalette};

use super::constants::{
    PANEL_CORNER_RADIUS_PX, SETTINGS_FIRST_ROW_OFFSET_PX, SETTINGS_PANEL_PADDING_PX,
    SETTINGS_ROW_HEIGHT_PX, SETTINGS_VALUE_HEIGHT_PX, SETTINGS_VALUE_WIDTH_PX,
};

const HEADING: &str = "Dashboard Settings";
const CAPTION: &str = "Customize your temperature analysis view";

/// One labelled setting; touching anywhere on the row toggles it
struct SettingRow {
    bounds: Rectangle,
    label: &'static str,
    value: Button,
}

impl SettingRow {
    fn new(bounds: Rectangle, label: &'static str, action: DashboardAction) -> Self {
        let value_top = bounds.top_left.y
            + (bounds.size.height as i32 - SETTINGS_VALUE_HEIGHT_PX as i32) / 2;
        let value_left =
            bounds.top_left.x + bounds.size.width as i32 - SETTINGS_VALUE_WIDTH_PX as i32;
        let value_bounds = Rectangle::new(
            Point::new(value_left, value_top),
            Size::new(SETTINGS_VALUE_WIDTH_PX, SETTINGS_VALUE_HEIGHT_PX),
        );

        Self {
            bounds,
            label,
            value: Button::new(value_bounds, "", action).with_variant(ButtonVariant::Outline),
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        palette: &ColorPalette,
        display: &mut D,
    ) -> Result<(), D::Error> {
        Text::with_baseline(
            self.label,
            Point::new(self.bounds.top_left.x, self.bounds.center().y),
            MonoTextStyle::new(&FONT_6X10, palette.text_primary),
            Baseline::Middle,
        )
        .draw(display)?;

        self.value.draw(display)
    }
}

/// Right-hand overlay shown while the settings panel is open
pub struct SettingsPanel {
    bounds: Rectangle,
    palette: ColorPalette,
    rows: [SettingRow; 3],
}

impl SettingsPanel {
    pub fn new(bounds: Rectangle) -> Self {
        let row_left = bounds.top_left.x + SETTINGS_PANEL_PADDING_PX;
        let row_width = bounds.size.width - 2 * SETTINGS_PANEL_PADDING_PX as u32;
        let row = |index: i32| {
            Rectangle::new(
                Point::new(
                    row_left,
                    bounds.top_left.y
                        + SETTINGS_FIRST_ROW_OFFSET_PX
                        + index * SETTINGS_ROW_HEIGHT_PX as i32,
                ),
                Size::new(row_width, SETTINGS_ROW_HEIGHT_PX),
            )
        };

        Self {
            bounds,
            palette: ColorPalette::light(),
            rows: [
                SettingRow::new(row(0), "Temperature Unit", DashboardAction::ToggleUnit),
                SettingRow::new(row(1), "Show Gridlines", DashboardAction::ToggleGridlines),
                SettingRow::new(row(2), "Chart Style", DashboardAction::CycleChartStyle),
            ],
        }
    }

    /// Refresh row values and colors from the current settings
    pub fn sync(&mut self, settings: &Settings, palette: ColorPalette) {
        self.palette = palette;

        let values = [
            settings.unit.label(),
            if settings.show_gridlines { "On" } else { "Off" },
            settings.chart_style.label(),
        ];
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.value.set_label(value);
            row.value.set_palette(palette);
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn contains(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    /// Action for a press at `point`, if it lands on a setting row
    pub fn action_at(&self, point: TouchPoint) -> Option<DashboardAction> {
        self.rows
            .iter()
            .find(|row| row.bounds.contains(point.to_point()) || row.value.contains_point(point))
            .map(|row| row.value.action())
    }

    /// Current value label of each row, top to bottom
    pub fn values(&self) -> [&str; 3] {
        [
            self.rows[0].value.label(),
            self.rows[1].value.label(),
            self.rows[2].value.label(),
        ]
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let panel_style = PrimitiveStyleBuilder::new()
            .fill_color(self.palette.surface)
            .stroke_color(self.palette.border)
            .stroke_width(1)
            .build();
        let radius = Size::new(PANEL_CORNER_RADIUS_PX, PANEL_CORNER_RADIUS_PX);
        RoundedRectangle::with_equal_corners(self.bounds, radius)
            .into_styled(panel_style)
            .draw(display)?;

        let left = self.bounds.top_left.x + SETTINGS_PANEL_PADDING_PX;
        let top = self.bounds.top_left.y + SETTINGS_PANEL_PADDING_PX;

        Text::with_baseline(
            HEADING,
            Point::new(left, top),
            MonoTextStyle::new(&FONT_9X15_BOLD, self.palette.text_primary),
            Baseline::Top,
        )
        .draw(display)?;

        Text::with_baseline(
            CAPTION,
            Point::new(left, top + 20),
            MonoTextStyle::new(&FONT_6X10, self.palette.text_secondary),
            Baseline::Top,
        )
        .draw(display)?;

        for row in &self.rows {
            row.draw(&self.palette, display)?;
        }

        Ok(())
    }
}
