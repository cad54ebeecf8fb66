//! DashboardPage implementation and Page trait

use core::fmt::Write;

use alloc::vec::Vec;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;
use log::debug;

use crate::model::{AmbientEstimate, MAX_HOUR, Series, TemperatureUnit, format_temperature};
use crate::pages::Page;
use crate::state::{ChartStyle, DashboardAction, DashboardState, Settings};
use crate::ui::components::graph::constants::{
    DEFAULT_SERIES_LINE_WIDTH_PX, MAX_AXIS_TITLE_LENGTH,
};
use crate::ui::components::graph::{
    AxisTicks, DataPoint, DataSeries, Graph, GridConfig, InterpolationType, LabelFormatter,
    LineStyle, ReferenceLine, SeriesStyle, ViewportPadding, XAxisConfig, YAxisConfig, axis_title,
};
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::{Button, ButtonVariant, HourSlider, Theme};

use super::constants::{
    ACTION_BUTTON_GAP_PX, ACTION_BUTTON_HEIGHT_PX, ACTION_ROW_OFFSET_PX,
    CALCULATE_BUTTON_WIDTH_PX, CONTROLS_PADDING_PX, ESTIMATE_PANEL_HEIGHT_PX,
    ESTIMATE_PANEL_OFFSET_PX, GRAPH_HEIGHT_PX, GRAPH_PADDING_PX, HEADER_BUTTON_HEIGHT_PX,
    HEADER_BUTTON_TOP_PX, HEADER_HEIGHT_PX, HEADER_TITLE_PADDING_LEFT_PX, HOUR_ROW_OFFSET_PX,
    LEGEND_ENTRY_LEFT_PX, LEGEND_HEIGHT_PX, LEGEND_SWATCH_PX, LEGEND_TEXT_GAP_PX,
    MAX_CHART_POINTS, MAX_CHART_SERIES, MAX_READOUT_LENGTH, PANEL_CORNER_RADIUS_PX,
    READOUT_CORNER_RADIUS_PX, READOUT_CURSOR_GAP_PX, READOUT_HEIGHT_PX, READOUT_PADDING_PX,
    READOUT_TOP_OFFSET_PX, REFRESH_BUTTON_WIDTH_PX, SETTINGS_BUTTON_LEFT_PX,
    SETTINGS_BUTTON_WIDTH_PX, SETTINGS_PANEL_HEIGHT_PX, SETTINGS_PANEL_LEFT_PX,
    SETTINGS_PANEL_TOP_PX, SETTINGS_PANEL_WIDTH_PX, SLIDER_HEIGHT_PX, SLIDER_LEFT_PX,
    SLIDER_WIDTH_PX, THEME_BUTTON_LEFT_PX, THEME_BUTTON_WIDTH_PX, Y_TICK_STEP_CELSIUS,
};
use super::settings_panel::SettingsPanel;

const TITLE: &str = "Temperature Analysis Dashboard";

const LOCAL_SERIES: usize = 0;
const BATTERY_SERIES: usize = 1;

/// The single dashboard screen: header, legend, chart, hour selector,
/// estimate panel and the settings overlay
pub struct DashboardPage {
    bounds: Rectangle,
    dirty: bool,

    // Layout sections
    header_bounds: Rectangle,
    legend_bounds: Rectangle,
    graph_bounds: Rectangle,
    controls_bounds: Rectangle,

    // Components
    graph: Graph<MAX_CHART_SERIES, MAX_CHART_POINTS>,
    theme_button: Button,
    settings_button: Button,
    hour_slider: HourSlider,
    calculate_button: Button,
    refresh_button: Button,
    settings_panel: SettingsPanel,

    // Cached state
    theme: Theme,
    settings: Settings,
    selected_hour: u8,
    ambient: Option<AmbientEstimate>,
    ambient_stale: bool,
    settings_open: bool,
    /// Series generation currently loaded into the graph
    generation: Option<u32>,
    series: Series,
    /// Hour under the last chart touch
    readout_hour: Option<u8>,
}

/// Placement of the hour readout: cursor x, box and text
struct Readout {
    cursor_x: i32,
    bounds: Rectangle,
    text: String<MAX_READOUT_LENGTH>,
}

impl DashboardPage {
    /// Lay out the page inside `bounds` and load `state`
    pub fn new(bounds: Rectangle, state: &DashboardState) -> Self {
        let origin = bounds.top_left;
        let width = bounds.size.width;

        let header_bounds = Rectangle::new(origin, Size::new(width, HEADER_HEIGHT_PX));
        let legend_bounds = Rectangle::new(
            origin + Point::new(0, HEADER_HEIGHT_PX as i32),
            Size::new(width, LEGEND_HEIGHT_PX),
        );
        let graph_top = HEADER_HEIGHT_PX + LEGEND_HEIGHT_PX;
        let graph_bounds = Rectangle::new(
            origin + Point::new(0, graph_top as i32),
            Size::new(width, GRAPH_HEIGHT_PX),
        );
        let controls_top = graph_top + GRAPH_HEIGHT_PX;
        let controls_bounds = Rectangle::new(
            origin + Point::new(0, controls_top as i32),
            Size::new(width, bounds.size.height.saturating_sub(controls_top)),
        );

        let header_button = |left: i32, width: u32| {
            Rectangle::new(
                origin + Point::new(left, HEADER_BUTTON_TOP_PX),
                Size::new(width, HEADER_BUTTON_HEIGHT_PX),
            )
        };

        let controls_origin = controls_bounds.top_left;
        let slider_bounds = Rectangle::new(
            controls_origin + Point::new(SLIDER_LEFT_PX, HOUR_ROW_OFFSET_PX),
            Size::new(SLIDER_WIDTH_PX, SLIDER_HEIGHT_PX),
        );
        let calculate_bounds = Rectangle::new(
            controls_origin + Point::new(CONTROLS_PADDING_PX, ACTION_ROW_OFFSET_PX),
            Size::new(CALCULATE_BUTTON_WIDTH_PX, ACTION_BUTTON_HEIGHT_PX),
        );
        let refresh_bounds = Rectangle::new(
            controls_origin
                + Point::new(
                    CONTROLS_PADDING_PX + CALCULATE_BUTTON_WIDTH_PX as i32 + ACTION_BUTTON_GAP_PX,
                    ACTION_ROW_OFFSET_PX,
                ),
            Size::new(REFRESH_BUTTON_WIDTH_PX, ACTION_BUTTON_HEIGHT_PX),
        );
        let panel_bounds = Rectangle::new(
            origin + Point::new(SETTINGS_PANEL_LEFT_PX, SETTINGS_PANEL_TOP_PX),
            Size::new(SETTINGS_PANEL_WIDTH_PX, SETTINGS_PANEL_HEIGHT_PX),
        );

        let (top, right, bottom, left) = GRAPH_PADDING_PX;
        let mut graph =
            Graph::new(graph_bounds).with_padding(ViewportPadding::new(top, right, bottom, left));
        let _ = graph.add_series(DataSeries::new());
        let _ = graph.add_series(DataSeries::new());

        let mut page = Self {
            bounds,
            dirty: true,
            header_bounds,
            legend_bounds,
            graph_bounds,
            controls_bounds,
            graph,
            theme_button: Button::new(
                header_button(THEME_BUTTON_LEFT_PX, THEME_BUTTON_WIDTH_PX),
                "",
                DashboardAction::ToggleTheme,
            )
            .with_variant(ButtonVariant::Outline),
            settings_button: Button::new(
                header_button(SETTINGS_BUTTON_LEFT_PX, SETTINGS_BUTTON_WIDTH_PX),
                "Settings",
                DashboardAction::ToggleSettingsPanel,
            )
            .with_variant(ButtonVariant::Outline),
            hour_slider: HourSlider::new(slider_bounds),
            calculate_button: Button::new(
                calculate_bounds,
                "Calculate Ambient Temperature",
                DashboardAction::CalculateAmbient,
            ),
            refresh_button: Button::new(
                refresh_bounds,
                "Refresh Data",
                DashboardAction::RefreshSeries,
            )
            .with_variant(ButtonVariant::Outline),
            settings_panel: SettingsPanel::new(panel_bounds),
            theme: Theme::for_mode(state.settings().theme),
            settings: *state.settings(),
            selected_hour: state.selected_hour(),
            ambient: None,
            ambient_stale: false,
            settings_open: state.settings_open(),
            generation: None,
            series: Series::default(),
            readout_hour: None,
        };

        page.apply_settings();
        page.sync(state);
        page
    }

    /// Bring the page up to date with `state`, marking it dirty on any change
    pub fn sync(&mut self, state: &DashboardState) {
        let settings = *state.settings();
        let settings_changed = self.settings != settings;
        if settings_changed {
            self.settings = settings;
            self.theme = Theme::for_mode(settings.theme);
            self.apply_settings();
            self.dirty = true;
        }

        if self.generation != Some(state.generation()) {
            self.load_series(state.series());
            self.generation = Some(state.generation());
            self.dirty = true;
        }

        if self.selected_hour != state.selected_hour() {
            self.selected_hour = state.selected_hour();
            self.hour_slider.set_hour(self.selected_hour);
            self.dirty = true;
        }

        let ambient = state.ambient().copied();
        let ambient_stale = state.ambient_is_stale();
        if settings_changed || self.ambient != ambient || self.ambient_stale != ambient_stale {
            self.ambient = ambient;
            self.ambient_stale = ambient_stale;
            self.graph.set_reference_line(self.reference_line());
            self.dirty = true;
        }

        if self.settings_open != state.settings_open() {
            self.settings_open = state.settings_open();
            self.dirty = true;
        }
    }

    /// Push theme, unit, gridline and chart style settings into the components
    fn apply_settings(&mut self) {
        let palette = self.theme.palette;
        let chart = self.theme.chart;
        let label_style = MonoTextStyle::new(&FONT_6X10, palette.text_secondary);

        self.graph.set_background(palette.background);
        self.graph.set_grid(if self.settings.show_gridlines {
            GridConfig::dashed(chart.grid)
        } else {
            GridConfig::none()
        });
        self.graph.set_x_axis(Some(XAxisConfig {
            ticks: AxisTicks::Every(3.0),
            label_formatter: LabelFormatter::Hour,
            label_style,
            title: Some(axis_title("Hour of Day")),
            show_axis_line: true,
        }));
        self.graph
            .set_y_axis(Some(temperature_axis(self.settings.unit, label_style)));

        let interpolation = interpolation_for(self.settings.chart_style);
        for (index, color) in [(LOCAL_SERIES, chart.local), (BATTERY_SERIES, chart.battery)] {
            let style = SeriesStyle {
                color,
                line_width: DEFAULT_SERIES_LINE_WIDTH_PX,
                show_points: true,
            };
            let _ = self.graph.set_series_style(index, style);
            let _ = self.graph.set_series_interpolation(index, interpolation);
        }

        self.theme_button
            .set_label(self.settings.theme.toggled().label());
        for button in [
            &mut self.theme_button,
            &mut self.settings_button,
            &mut self.calculate_button,
            &mut self.refresh_button,
        ] {
            button.set_palette(palette);
        }
        self.hour_slider.set_palette(palette);
        self.hour_slider.set_hour(self.selected_hour);
        self.settings_panel.sync(&self.settings, palette);
    }

    fn load_series(&mut self, series: &Series) {
        let local: Vec<DataPoint> = series
            .iter()
            .map(|point| DataPoint::new(point.hour as f32, point.local_temperature))
            .collect();
        let battery: Vec<DataPoint> = series
            .iter()
            .map(|point| DataPoint::new(point.hour as f32, point.battery_temperature))
            .collect();

        self.series = series.clone();

        for (index, points) in [(LOCAL_SERIES, &local), (BATTERY_SERIES, &battery)] {
            if let Err(err) = self.graph.set_series_points(index, points) {
                debug!("Chart series {} not loaded: {}", index, err);
            }
        }
        let _ = self.graph.set_x_bounds(0.0, MAX_HOUR as f32);

        debug!("Chart loaded {} samples", series.len());
    }

    /// Dashed line at the current estimate, labelled in the display unit
    fn reference_line(&self) -> Option<ReferenceLine> {
        let estimate = self.ambient?;
        let color = self.theme.chart.ambient;

        let mut label = String::new();
        let _ = write!(
            label,
            "Ambient: {}",
            format_temperature(estimate.celsius, self.settings.unit)
        );

        Some(ReferenceLine {
            value: estimate.celsius,
            color,
            width: 1,
            style: LineStyle::dashed(),
            label,
            label_style: MonoTextStyle::new(&FONT_6X10, color),
        })
    }

    fn draw_header<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = &self.theme.palette;

        self.header_bounds
            .into_styled(PrimitiveStyle::with_fill(palette.surface))
            .draw(display)?;

        let bottom = self.header_bounds.top_left.y + HEADER_HEIGHT_PX as i32 - 1;
        Line::new(
            Point::new(self.header_bounds.top_left.x, bottom),
            Point::new(
                self.header_bounds.top_left.x + self.header_bounds.size.width as i32 - 1,
                bottom,
            ),
        )
        .into_styled(PrimitiveStyle::with_stroke(palette.border, 1))
        .draw(display)?;

        Text::with_baseline(
            TITLE,
            Point::new(
                self.header_bounds.top_left.x + HEADER_TITLE_PADDING_LEFT_PX,
                self.header_bounds.center().y,
            ),
            MonoTextStyle::new(&FONT_9X15_BOLD, palette.text_primary),
            Baseline::Middle,
        )
        .draw(display)?;

        self.theme_button.draw(display)?;
        self.settings_button.draw(display)?;

        Ok(())
    }

    fn draw_legend<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let chart = &self.theme.chart;
        let mut entries: heapless::Vec<(Rgb565, &str), 3> = heapless::Vec::new();
        let _ = entries.push((chart.local, "Local Temperature"));
        let _ = entries.push((chart.battery, "Battery Temperature"));
        if self.ambient.is_some() {
            let _ = entries.push((chart.ambient, "Ambient Estimate"));
        }

        let center_y = self.legend_bounds.center().y;
        let text_style = MonoTextStyle::new(&FONT_6X10, self.theme.palette.text_primary);

        for ((color, label), left) in entries.into_iter().zip(LEGEND_ENTRY_LEFT_PX) {
            let x = self.legend_bounds.top_left.x + left;
            Rectangle::new(
                Point::new(x, center_y - (LEGEND_SWATCH_PX / 2) as i32),
                Size::new(LEGEND_SWATCH_PX, LEGEND_SWATCH_PX),
            )
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)?;

            Text::with_baseline(
                label,
                Point::new(x + LEGEND_SWATCH_PX as i32 + LEGEND_TEXT_GAP_PX, center_y),
                text_style,
                Baseline::Middle,
            )
            .draw(display)?;
        }

        Ok(())
    }

    fn draw_graph<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.graph.draw(display)?;

        if self.series.is_empty() {
            let text_style = TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build();
            Text::with_text_style(
                "No data available",
                self.graph_bounds.center(),
                MonoTextStyle::new(&FONT_6X10, self.theme.palette.text_secondary),
                text_style,
            )
            .draw(display)?;
        }

        Ok(())
    }

    /// Nearest hour for a touch on the plot area
    fn chart_hour_at(&self, point: TouchPoint) -> Option<u8> {
        let viewport = self.graph.viewport();
        let plot = viewport.plot_area();
        // Include the right and bottom edges, where hour 23 and the lowest
        // values are drawn
        let hit_area = Rectangle::new(plot.top_left, plot.size + Size::new(1, 1));
        if !hit_area.contains(point.to_point()) {
            return None;
        }

        let hour = libm::roundf(viewport.screen_to_x(point.x as i32));
        Some(hour.clamp(0.0, MAX_HOUR as f32) as u8)
    }

    /// Show, move or hide the readout for a touch
    ///
    /// A press off the chart hides it; a drag off the chart leaves it where it was.
    fn track_readout(&mut self, event: TouchEvent) {
        let hour = self.chart_hour_at(event.point());
        if hour.is_none() && matches!(event, TouchEvent::Drag(_)) {
            return;
        }

        if self.readout_hour != hour {
            self.readout_hour = hour;
            self.dirty = true;
        }
    }

    fn readout(&self) -> Option<Readout> {
        let sample = self.series.get(self.readout_hour?)?;
        let unit = self.settings.unit;

        let mut text = String::new();
        let _ = write!(
            text,
            "{}:00  Local {}  Battery {}",
            sample.hour,
            format_temperature(sample.local_temperature, unit),
            format_temperature(sample.battery_temperature, unit)
        );

        let viewport = self.graph.viewport();
        let plot = viewport.plot_area();
        let cursor_x = viewport.x_to_screen(sample.hour as f32);

        let char_width = FONT_6X10.character_size.width;
        let width = text.chars().count() as u32 * char_width + 2 * READOUT_PADDING_PX as u32;
        let plot_right = plot.top_left.x + plot.size.width as i32;

        // Right of the cursor, flipped to the left near the right edge
        let mut left = cursor_x + READOUT_CURSOR_GAP_PX;
        if left + width as i32 > plot_right {
            left = (cursor_x - READOUT_CURSOR_GAP_PX - width as i32).max(plot.top_left.x);
        }

        Some(Readout {
            cursor_x,
            bounds: Rectangle::new(
                Point::new(left, plot.top_left.y + READOUT_TOP_OFFSET_PX),
                Size::new(width, READOUT_HEIGHT_PX),
            ),
            text,
        })
    }

    fn draw_readout<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(readout) = self.readout() else {
            return Ok(());
        };
        let palette = &self.theme.palette;
        let plot = self.graph.viewport().plot_area();

        Line::new(
            Point::new(readout.cursor_x, plot.top_left.y),
            Point::new(readout.cursor_x, plot.top_left.y + plot.size.height as i32),
        )
        .into_styled(PrimitiveStyle::with_stroke(palette.border, 1))
        .draw(display)?;

        let box_style = PrimitiveStyleBuilder::new()
            .fill_color(palette.surface)
            .stroke_color(palette.border)
            .stroke_width(1)
            .build();
        let radius = Size::new(READOUT_CORNER_RADIUS_PX, READOUT_CORNER_RADIUS_PX);
        RoundedRectangle::with_equal_corners(readout.bounds, radius)
            .into_styled(box_style)
            .draw(display)?;

        Text::with_baseline(
            readout.text.as_str(),
            Point::new(
                readout.bounds.top_left.x + READOUT_PADDING_PX,
                readout.bounds.center().y,
            ),
            MonoTextStyle::new(&FONT_6X10, palette.text_primary),
            Baseline::Middle,
        )
        .draw(display)?;

        Ok(())
    }

    fn draw_controls<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = &self.theme.palette;

        let mut hour_label: String<24> = String::new();
        let _ = write!(hour_label, "Select Hour: {}:00", self.selected_hour);
        Text::with_baseline(
            hour_label.as_str(),
            Point::new(
                self.controls_bounds.top_left.x + CONTROLS_PADDING_PX,
                self.hour_slider.bounds().center().y,
            ),
            MonoTextStyle::new(&FONT_6X10, palette.text_primary),
            Baseline::Middle,
        )
        .draw(display)?;

        self.hour_slider.draw(display)?;
        self.calculate_button.draw(display)?;
        self.refresh_button.draw(display)?;

        if let Some(estimate) = self.ambient {
            self.draw_estimate_panel(&estimate, display)?;
        }

        Ok(())
    }

    fn draw_estimate_panel<D>(&self, estimate: &AmbientEstimate, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = &self.theme.palette;
        let panel = Rectangle::new(
            self.controls_bounds.top_left + Point::new(CONTROLS_PADDING_PX, ESTIMATE_PANEL_OFFSET_PX),
            Size::new(
                self.controls_bounds.size.width - 2 * CONTROLS_PADDING_PX as u32,
                ESTIMATE_PANEL_HEIGHT_PX,
            ),
        );

        let panel_style = PrimitiveStyleBuilder::new()
            .fill_color(palette.surface)
            .stroke_color(palette.border)
            .stroke_width(1)
            .build();
        let radius = Size::new(PANEL_CORNER_RADIUS_PX, PANEL_CORNER_RADIUS_PX);
        RoundedRectangle::with_equal_corners(panel, radius)
            .into_styled(panel_style)
            .draw(display)?;

        let text_left = panel.top_left.x + CONTROLS_PADDING_PX;
        let caption_style = MonoTextStyle::new(&FONT_6X10, palette.text_secondary);

        let mut caption: String<48> = String::new();
        let _ = write!(caption, "Estimated Room Temperature at {}:00", estimate.hour);
        Text::with_baseline(
            caption.as_str(),
            Point::new(text_left, panel.top_left.y + 5),
            caption_style,
            Baseline::Top,
        )
        .draw(display)?;

        if self.ambient_stale {
            Text::with_baseline(
                "(from previous series)",
                Point::new(text_left, panel.top_left.y + 18),
                caption_style,
                Baseline::Top,
            )
            .draw(display)?;
        }

        let value = format_temperature(estimate.celsius, self.settings.unit);
        let value_style = TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            value.as_str(),
            Point::new(
                panel.top_left.x + panel.size.width as i32 - CONTROLS_PADDING_PX,
                panel.center().y,
            ),
            MonoTextStyle::new(&FONT_9X15_BOLD, palette.text_primary),
            value_style,
        )
        .draw(display)?;

        Ok(())
    }
}

/// Graph interpolation for a chart style
fn interpolation_for(style: ChartStyle) -> InterpolationType {
    match style {
        ChartStyle::Linear => InterpolationType::Linear,
        ChartStyle::Curved => InterpolationType::Monotone,
        ChartStyle::Stepped => InterpolationType::Stepped,
    }
}

/// Y axis with ticks every 5 °C, labelled as whole numbers in `unit`
fn temperature_axis(
    unit: TemperatureUnit,
    label_style: MonoTextStyle<'static, Rgb565>,
) -> YAxisConfig {
    let mut title: String<MAX_AXIS_TITLE_LENGTH> = String::new();
    let _ = write!(title, "Temperature ({})", unit.symbol());

    YAxisConfig {
        ticks: AxisTicks::Every(Y_TICK_STEP_CELSIUS),
        label_formatter: LabelFormatter::Temperature { unit, precision: 0 },
        label_style,
        title: Some(title),
        show_axis_line: true,
    }
}

impl Page for DashboardPage {
    fn title(&self) -> &str {
        TITLE
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<DashboardAction> {
        let point = event.point();

        // The open overlay captures every touch inside it
        if self.settings_open && self.settings_panel.contains(point) {
            return match event {
                TouchEvent::Press(_) => self.settings_panel.action_at(point),
                TouchEvent::Drag(_) => None,
            };
        }

        self.track_readout(event);

        if let TouchResult::Action(action) = self.hour_slider.handle_touch(event) {
            return Some(action);
        }

        for button in [
            &mut self.theme_button,
            &mut self.settings_button,
            &mut self.calculate_button,
            &mut self.refresh_button,
        ] {
            if let TouchResult::Action(action) = button.handle_touch(event) {
                return Some(action);
            }
        }

        None
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.theme.palette.background))
            .draw(display)?;

        self.draw_header(display)?;
        self.draw_legend(display)?;
        self.draw_graph(display)?;
        self.draw_readout(display)?;
        self.draw_controls(display)?;

        if self.settings_open {
            self.settings_panel.draw(display)?;
        }

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
        self.graph.mark_clean();
        self.hour_slider.mark_clean();
        for button in [
            &mut self.theme_button,
            &mut self.settings_button,
            &mut self.calculate_button,
            &mut self.refresh_button,
        ] {
            button.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::testing::Canvas;
    use crate::model::to_display_unit;
    use crate::ui::styling::colors::DARK_BACKGROUND;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SCREEN: Size = Size::new(480, 320);

    struct Harness {
        rng: StdRng,
        state: DashboardState,
        page: DashboardPage,
    }

    impl Harness {
        fn new() -> Self {
            let mut rng = StdRng::seed_from_u64(11);
            let state = DashboardConfig::default().initial_state(&mut rng).unwrap();
            let page = DashboardPage::new(Rectangle::new(Point::zero(), SCREEN), &state);
            Self { rng, state, page }
        }

        fn dispatch(&mut self, action: DashboardAction) {
            let state = core::mem::replace(&mut self.state, placeholder_state());
            self.state = state.update(action, &mut self.rng);
            self.page.sync(&self.state);
        }

        fn render(&mut self) -> Canvas {
            let mut canvas = Canvas::new(SCREEN, Rgb565::RED);
            self.page.draw_page(&mut canvas).unwrap();
            self.page.mark_clean();
            canvas
        }
    }

    fn placeholder_state() -> DashboardState {
        DashboardState::new(Default::default(), Settings::default(), 0)
    }

    fn press(x: u16, y: u16) -> TouchEvent {
        TouchEvent::Press(TouchPoint::new(x, y))
    }

    #[test]
    fn test_ambient_color_only_after_calculation() {
        let mut harness = Harness::new();
        let ambient = harness.page.theme.chart.ambient;

        let canvas = harness.render();
        assert_eq!(canvas.count(ambient), 0);

        harness.dispatch(DashboardAction::CalculateAmbient);
        assert!(harness.page.is_dirty());
        let canvas = harness.render();
        assert!(canvas.count_in(harness.page.graph_bounds, ambient) > 0);
        assert!(canvas.count_in(harness.page.legend_bounds, ambient) > 0);
    }

    #[test]
    fn test_gridline_toggle_changes_grid_pixels() {
        let mut harness = Harness::new();
        let grid = harness.page.theme.chart.grid;

        let canvas = harness.render();
        assert!(canvas.count_in(harness.page.graph_bounds, grid) > 0);

        harness.dispatch(DashboardAction::ToggleGridlines);
        let canvas = harness.render();
        assert_eq!(canvas.count(grid), 0);
    }

    #[test]
    fn test_settings_overlay_reflects_settings() {
        let mut harness = Harness::new();
        let panel = harness.page.settings_panel.bounds();
        let surface = harness.page.theme.palette.surface;

        let canvas = harness.render();
        assert_eq!(canvas.count_in(panel, surface), 0);

        harness.dispatch(DashboardAction::ToggleSettingsPanel);
        let canvas = harness.render();
        assert!(canvas.count_in(panel, surface) > 0);
        assert_eq!(harness.page.settings_panel.values(), ["Celsius", "On", "Linear"]);

        harness.dispatch(DashboardAction::ToggleUnit);
        harness.dispatch(DashboardAction::CycleChartStyle);
        assert_eq!(harness.page.settings_panel.values(), ["Fahrenheit", "On", "Curved"]);
    }

    #[test]
    fn test_touch_maps_to_actions() {
        let mut harness = Harness::new();
        let page = &mut harness.page;

        let center = |b: Rectangle| {
            let c = b.center();
            press(c.x as u16, c.y as u16)
        };

        assert_eq!(
            page.handle_touch(center(page.calculate_button.bounds())),
            Some(DashboardAction::CalculateAmbient)
        );
        assert_eq!(
            page.handle_touch(center(page.refresh_button.bounds())),
            Some(DashboardAction::RefreshSeries)
        );
        assert_eq!(
            page.handle_touch(center(page.theme_button.bounds())),
            Some(DashboardAction::ToggleTheme)
        );
        assert_eq!(
            page.handle_touch(center(page.settings_button.bounds())),
            Some(DashboardAction::ToggleSettingsPanel)
        );

        let slider = page.hour_slider.bounds();
        let right_end = slider.top_left.x + slider.size.width as i32 - 1;
        assert_eq!(
            page.handle_touch(TouchEvent::Drag(TouchPoint::new(
                right_end as u16,
                slider.center().y as u16
            ))),
            Some(DashboardAction::SelectHour(23))
        );

        // Chart touches only move the readout
        let graph = page.graph_bounds.center();
        assert_eq!(page.handle_touch(press(graph.x as u16, graph.y as u16)), None);
        assert!(page.readout_hour.is_some());
    }

    #[test]
    fn test_open_panel_captures_touches() {
        let mut harness = Harness::new();
        harness.dispatch(DashboardAction::ToggleSettingsPanel);

        let panel = harness.page.settings_panel.bounds();
        // First row sits 48 px below the panel top
        let row_y = (panel.top_left.y + 48 + 15) as u16;
        let row_x = (panel.top_left.x + 20) as u16;
        assert_eq!(
            harness.page.handle_touch(press(row_x, row_y)),
            Some(DashboardAction::ToggleUnit)
        );
        assert_eq!(
            harness.page.handle_touch(press(row_x, row_y + 30)),
            Some(DashboardAction::ToggleGridlines)
        );
        assert_eq!(
            harness.page.handle_touch(press(row_x, row_y + 60)),
            Some(DashboardAction::CycleChartStyle)
        );

        // Heading area swallows the press instead of reaching the chart
        assert_eq!(
            harness.page.handle_touch(press(row_x, (panel.top_left.y + 12) as u16)),
            None
        );
    }

    #[test]
    fn test_sync_marks_dirty_only_on_change() {
        let mut harness = Harness::new();
        harness.render();
        assert!(!harness.page.is_dirty());

        let state = harness.state.clone();
        harness.page.sync(&state);
        assert!(!harness.page.is_dirty());

        harness.dispatch(DashboardAction::NextHour);
        assert!(harness.page.is_dirty());
        assert_eq!(harness.page.hour_slider.hour(), 13);
    }

    #[test]
    fn test_estimate_goes_stale_after_refresh() {
        let mut harness = Harness::new();
        harness.dispatch(DashboardAction::CalculateAmbient);
        let estimate = harness.page.ambient.unwrap();

        harness.dispatch(DashboardAction::RefreshSeries);
        assert!(harness.page.ambient_stale);
        assert_eq!(harness.page.ambient, Some(estimate));
        assert_eq!(
            harness.page.graph.reference_line().map(|line| line.value),
            Some(estimate.celsius)
        );
    }

    #[test]
    fn test_dark_theme_repaints_background() {
        let mut harness = Harness::new();
        harness.dispatch(DashboardAction::ToggleTheme);
        assert_eq!(harness.page.theme_button.label(), "Light");

        let canvas = harness.render();
        let inside = harness.page.graph_bounds.top_left + Point::new(1, 12);
        assert_eq!(canvas.pixel(inside), Some(DARK_BACKGROUND));
    }

    fn expected_readout(
        state: &DashboardState,
        hour: u8,
        unit: TemperatureUnit,
    ) -> String<MAX_READOUT_LENGTH> {
        let sample = state.series().get(hour).unwrap();
        let mut text = String::new();
        write!(
            text,
            "{}:00  Local {}  Battery {}",
            hour,
            format_temperature(sample.local_temperature, unit),
            format_temperature(sample.battery_temperature, unit)
        )
        .unwrap();
        text
    }

    #[test]
    fn test_chart_touch_shows_hour_readout() {
        let mut harness = Harness::new();
        let surface = harness.page.theme.palette.surface;
        let viewport = harness.page.graph.viewport().clone();
        let plot = viewport.plot_area();
        let y = plot.center().y as u16;

        let before = harness.render();
        assert!(harness.page.readout().is_none());

        let x = viewport.x_to_screen(14.0) as u16;
        assert_eq!(harness.page.handle_touch(press(x, y)), None);
        assert_eq!(harness.page.readout_hour, Some(14));
        assert!(harness.page.is_dirty());

        let readout = harness.page.readout().unwrap();
        assert_eq!(
            readout.text,
            expected_readout(&harness.state, 14, TemperatureUnit::Celsius)
        );
        assert!(plot.contains(readout.bounds.top_left));

        let after = harness.render();
        assert!(after.count_in(readout.bounds, surface) > before.count_in(readout.bounds, surface));

        // Dragging along the chart follows the nearest hour
        let x = viewport.x_to_screen(22.6) as u16;
        harness.page.handle_touch(TouchEvent::Drag(TouchPoint::new(x, y)));
        assert_eq!(harness.page.readout_hour, Some(23));
        let readout = harness.page.readout().unwrap();
        let plot_right = plot.top_left.x + plot.size.width as i32;
        assert!(readout.bounds.top_left.x + readout.bounds.size.width as i32 <= plot_right);
    }

    #[test]
    fn test_readout_follows_unit() {
        let mut harness = Harness::new();
        let viewport = harness.page.graph.viewport().clone();
        let x = viewport.x_to_screen(6.0) as u16;
        let y = viewport.plot_area().center().y as u16;
        harness.page.handle_touch(press(x, y));
        harness.render();

        harness.dispatch(DashboardAction::ToggleUnit);
        assert!(harness.page.is_dirty());
        let readout = harness.page.readout().unwrap();
        assert_eq!(
            readout.text,
            expected_readout(&harness.state, 6, TemperatureUnit::Fahrenheit)
        );
        assert!(readout.text.contains("°F"));

        // New data keeps the hour and shows the new values
        harness.dispatch(DashboardAction::RefreshSeries);
        assert_eq!(
            harness.page.readout().unwrap().text,
            expected_readout(&harness.state, 6, TemperatureUnit::Fahrenheit)
        );
    }

    #[test]
    fn test_readout_hides_on_press_off_chart() {
        let mut harness = Harness::new();
        let viewport = harness.page.graph.viewport().clone();
        let plot = viewport.plot_area();
        let x = viewport.x_to_screen(3.0) as u16;
        harness.page.handle_touch(press(x, plot.center().y as u16));
        assert_eq!(harness.page.readout_hour, Some(3));

        // A drag that leaves the chart keeps the readout
        harness
            .page
            .handle_touch(TouchEvent::Drag(TouchPoint::new(x, 4)));
        assert_eq!(harness.page.readout_hour, Some(3));

        harness.page.handle_touch(press(x, 4));
        assert_eq!(harness.page.readout_hour, None);
        assert!(harness.page.readout().is_none());
    }

    #[test]
    fn test_temperature_ticks_land_on_whole_labels() {
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
        let cases = [
            (TemperatureUnit::Celsius, ["20°C", "25°C", "30°C"]),
            (TemperatureUnit::Fahrenheit, ["68°F", "77°F", "86°F"]),
        ];

        for (unit, labels) in cases {
            let axis = temperature_axis(unit, style);
            let ticks = axis.ticks.values(17.3, 33.8);
            assert_eq!(ticks.as_slice(), &[20.0, 25.0, 30.0]);

            for (tick, label) in ticks.iter().zip(labels) {
                let shown = to_display_unit(*tick, unit);
                assert_eq!(shown, libm::roundf(shown));
                assert_eq!(axis.label_formatter.format(*tick).as_str(), label);
            }
        }
    }
}
