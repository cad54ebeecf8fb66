//! Main graph component with Drawable trait implementation
//!
//! The Graph component orchestrates all rendering and manages data series.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::ui::core::Drawable;

use super::axis::{AxisConfig, XAxisConfig, YAxisConfig, draw_x_axis, draw_y_axis};
use super::constants::AUTO_SCALE_MARGIN_FACTOR;
use super::grid::{GridConfig, draw_grid};
use super::interpolation::draw_series_path;
use super::reference::{ReferenceLine, draw_reference_line};
use super::series::{DataPoint, DataSeries, InterpolationType, SeriesCollection, SeriesStyle};
use super::viewport::{DataBounds, Viewport, ViewportPadding};
use super::{GraphError, GraphResult};

/// Main graph component
///
/// Generic over MAX_SERIES (number of data series) and MAX_POINTS (points per series).
pub struct Graph<const MAX_SERIES: usize, const MAX_POINTS: usize> {
    bounds: Rectangle,
    series_collection: SeriesCollection<MAX_SERIES, MAX_POINTS>,
    grid_config: GridConfig,
    axis_config: AxisConfig,
    viewport: Viewport,
    /// Fixed X range; Y is always auto-scaled
    x_bounds: Option<(f32, f32)>,
    reference_line: Option<ReferenceLine>,
    background_color: Rgb565,
    dirty: bool,
}

impl<const MAX_SERIES: usize, const MAX_POINTS: usize> Graph<MAX_SERIES, MAX_POINTS> {
    /// Create a new graph with default configuration
    pub fn new(bounds: Rectangle) -> Self {
        // Placeholder data bounds until the first points arrive
        let data_bounds = DataBounds::new(0.0, 1.0, 0.0, 1.0);
        let viewport = Viewport::new(data_bounds, bounds);

        Self {
            bounds,
            series_collection: SeriesCollection::new(),
            grid_config: GridConfig::default(),
            axis_config: AxisConfig::default(),
            viewport,
            x_bounds: None,
            reference_line: None,
            background_color: Rgb565::BLACK,
            dirty: true,
        }
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = color;
        self
    }

    pub fn set_background(&mut self, color: Rgb565) {
        if self.background_color != color {
            self.background_color = color;
            self.dirty = true;
        }
    }

    pub fn with_grid(mut self, config: GridConfig) -> Self {
        self.grid_config = config;
        self
    }

    pub fn set_grid(&mut self, config: GridConfig) {
        if self.grid_config != config {
            self.grid_config = config;
            self.dirty = true;
        }
    }

    /// Replace the X-axis configuration (e.g. after a theme change)
    pub fn set_x_axis(&mut self, config: Option<XAxisConfig>) {
        self.axis_config.x_axis = config;
        self.dirty = true;
    }

    /// Replace the Y-axis configuration (e.g. after a unit change)
    pub fn set_y_axis(&mut self, config: Option<YAxisConfig>) {
        self.axis_config.y_axis = config;
        self.dirty = true;
    }

    pub fn with_padding(mut self, padding: ViewportPadding) -> Self {
        self.viewport = self.viewport.with_padding(padding);
        self
    }

    /// Add a data series to the graph
    ///
    /// Returns the series index on success, or error if at capacity.
    pub fn add_series(&mut self, series: DataSeries<MAX_POINTS>) -> GraphResult<usize> {
        let index = self.series_collection.add(series)?;
        let _ = self.recalculate_viewport();
        self.dirty = true;
        Ok(index)
    }

    /// Replace all points in a series and recalculate viewport once
    ///
    /// Points past the series capacity are dropped.
    pub fn set_series_points(&mut self, series_idx: usize, points: &[DataPoint]) -> GraphResult<()> {
        let series = self.series_mut(series_idx)?;

        series.clear();
        for point in points.iter().copied() {
            if series.push(point).is_err() {
                break;
            }
        }

        self.recalculate_viewport()?;
        self.dirty = true;
        Ok(())
    }

    pub fn set_series_style(&mut self, series_idx: usize, style: SeriesStyle) -> GraphResult<()> {
        let series = self.series_mut(series_idx)?;
        if series.style != style {
            series.style = style;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn set_series_interpolation(
        &mut self,
        series_idx: usize,
        interpolation: InterpolationType,
    ) -> GraphResult<()> {
        let series = self.series_mut(series_idx)?;
        if series.interpolation != interpolation {
            series.interpolation = interpolation;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn series(&self, series_idx: usize) -> Option<&DataSeries<MAX_POINTS>> {
        self.series_collection.get(series_idx)
    }

    fn series_mut(&mut self, series_idx: usize) -> GraphResult<&mut DataSeries<MAX_POINTS>> {
        self.series_collection
            .get_mut(series_idx)
            .ok_or(GraphError::InvalidSeriesIndex { index: series_idx })
    }

    /// Fix the X-axis bounds without changing Y-axis auto-scaling
    pub fn set_x_bounds(&mut self, x_min: f32, x_max: f32) -> GraphResult<()> {
        if x_min >= x_max {
            return Err(GraphError::InvalidDataBounds);
        }

        self.x_bounds = Some((x_min, x_max));
        let mut bounds = *self.viewport.data_bounds();
        bounds.x_min = x_min;
        bounds.x_max = x_max;
        self.viewport.set_data_bounds(bounds);
        self.dirty = true;
        Ok(())
    }

    /// Show or hide the reference line
    ///
    /// The Y-axis auto-scaling includes the reference value so the line
    /// always stays inside the plot area.
    pub fn set_reference_line(&mut self, line: Option<ReferenceLine>) {
        self.reference_line = line;
        let _ = self.recalculate_viewport();
        self.dirty = true;
    }

    pub fn reference_line(&self) -> Option<&ReferenceLine> {
        self.reference_line.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Recalculate viewport bounds from all series data
    fn recalculate_viewport(&mut self) -> GraphResult<()> {
        let reference = self
            .reference_line
            .as_ref()
            .map(|line| DataPoint::new(0.0, line.value));

        let all_points = self
            .series_collection
            .iter()
            .flat_map(|series| series.points().iter())
            .chain(reference.iter());

        let mut bounds = DataBounds::from_points(all_points, AUTO_SCALE_MARGIN_FACTOR)
            .ok_or(GraphError::NoData)?;

        if let Some((x_min, x_max)) = self.x_bounds {
            bounds.x_min = x_min;
            bounds.x_max = x_max;
        }

        self.viewport.set_data_bounds(bounds);
        Ok(())
    }

    fn draw_background<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.background_color))
            .draw(display)
    }

    fn draw_series<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        for series in self.series_collection.iter() {
            if series.points().is_empty() {
                continue;
            }

            draw_series_path(
                series.points(),
                &self.viewport,
                series.style(),
                series.interpolation(),
                self.background_color,
                display,
            )?;
        }

        Ok(())
    }
}

impl<const MAX_SERIES: usize, const MAX_POINTS: usize> Drawable for Graph<MAX_SERIES, MAX_POINTS> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // Layered rendering: background → grid → series → reference → axes
        self.draw_background(display)?;
        draw_grid(&self.grid_config, &self.viewport, display)?;
        self.draw_series(display)?;

        if let Some(ref line) = self.reference_line {
            draw_reference_line(line, &self.viewport, display)?;
        }

        if let Some(ref x_axis) = self.axis_config.x_axis {
            draw_x_axis(x_axis, &self.viewport, display)?;
        }

        if let Some(ref y_axis) = self.axis_config.y_axis {
            draw_y_axis(y_axis, &self.viewport, display)?;
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
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Canvas;
    use crate::ui::components::graph::{GridLines, LineStyle};
    use embedded_graphics::mono_font::{MonoTextStyle, iso_8859_1::FONT_6X10};
    use heapless::String;

    const LINE: Rgb565 = Rgb565::GREEN;
    const GRID: Rgb565 = Rgb565::new(16, 32, 16);
    const REFERENCE: Rgb565 = Rgb565::MAGENTA;

    fn graph() -> Graph<1, 24> {
        let mut graph = Graph::new(Rectangle::new(Point::zero(), Size::new(200, 120)))
            .with_background(Rgb565::BLACK)
            .with_padding(ViewportPadding::uniform(10))
            .with_grid(GridConfig {
                vertical_lines: Some(GridLines::vertical().with_color(GRID)),
                horizontal_lines: Some(GridLines::horizontal().with_color(GRID)),
            });

        let series = DataSeries::new().with_style(SeriesStyle {
            color: LINE,
            line_width: 1,
            show_points: false,
        });
        graph.add_series(series).unwrap();

        let points: Vec<DataPoint> = (0..24)
            .map(|h| DataPoint::new(h as f32, 20.0 + (h % 5) as f32))
            .collect();
        graph.set_series_points(0, &points).unwrap();
        graph.set_x_bounds(0.0, 23.0).unwrap();
        graph
    }

    fn reference(value: f32) -> ReferenceLine {
        ReferenceLine {
            value,
            color: REFERENCE,
            width: 1,
            style: LineStyle::dashed(),
            label: String::new(),
            label_style: MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
        }
    }

    #[test]
    fn test_x_bounds_survive_new_points() {
        let mut graph = graph();
        graph.set_series_points(0, &[DataPoint::new(2.0, 1.0)]).unwrap();
        let bounds = graph.viewport().data_bounds();
        assert_eq!((bounds.x_min, bounds.x_max), (0.0, 23.0));
        assert!(bounds.y_min < 1.0 && bounds.y_max > 1.0);
    }

    #[test]
    fn test_invalid_series_index() {
        let mut graph = graph();
        assert!(matches!(
            graph.set_series_points(3, &[]),
            Err(GraphError::InvalidSeriesIndex { index: 3 })
        ));
        assert!(matches!(graph.set_x_bounds(5.0, 5.0), Err(GraphError::InvalidDataBounds)));
    }

    #[test]
    fn test_grid_toggle_changes_pixels() {
        let mut graph = graph();
        let mut with_grid = Canvas::new(Size::new(200, 120), Rgb565::BLACK);
        graph.draw(&mut with_grid).unwrap();
        assert!(with_grid.count(GRID) > 0);

        graph.set_grid(GridConfig::none());
        let mut without_grid = Canvas::new(Size::new(200, 120), Rgb565::BLACK);
        graph.draw(&mut without_grid).unwrap();
        assert_eq!(without_grid.count(GRID), 0);
        assert!(without_grid.count(LINE) > 0);
    }

    #[test]
    fn test_reference_line_extends_y_range() {
        let mut graph = graph();
        let mut canvas = Canvas::new(Size::new(200, 120), Rgb565::BLACK);
        graph.draw(&mut canvas).unwrap();
        assert_eq!(canvas.count(REFERENCE), 0);

        graph.set_reference_line(Some(reference(40.0)));
        assert!(graph.viewport().data_bounds().y_max >= 40.0);

        let mut canvas = Canvas::new(Size::new(200, 120), Rgb565::BLACK);
        graph.draw(&mut canvas).unwrap();
        let y = graph.viewport().y_to_screen(40.0);
        let row = Rectangle::new(Point::new(0, y), Size::new(200, 1));
        assert!(canvas.count_in(row, REFERENCE) > 20);

        graph.set_reference_line(None);
        let mut canvas = Canvas::new(Size::new(200, 120), Rgb565::BLACK);
        graph.draw(&mut canvas).unwrap();
        assert_eq!(canvas.count(REFERENCE), 0);
    }
}
