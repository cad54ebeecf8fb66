//! Interpolation algorithms for rendering series
//!
//! Every interpolation first produces a screen-space path, then the path is
//! drawn with embedded-graphics `Line` primitives. A `None` entry in a path
//! marks a point outside the viewport and breaks the line there.

extern crate alloc;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder};

use super::constants::{DEFAULT_SMOOTH_SUBDIVISIONS, POINT_MARKER_DIAMETER_PX};
use super::series::{DataPoint, InterpolationType, SeriesStyle};
use super::viewport::Viewport;

/// Screen path for `points` under the given interpolation
pub(super) fn screen_path(
    points: &[DataPoint],
    viewport: &Viewport,
    interpolation: InterpolationType,
) -> Vec<Option<Point>> {
    match interpolation {
        InterpolationType::Linear => collect_linear_screen_points(points, viewport),
        InterpolationType::Monotone => collect_smooth_screen_points(points, viewport),
        InterpolationType::Stepped => collect_stepped_screen_points(points, viewport),
    }
}

/// Draw a data series: its path, then optional point markers
pub(super) fn draw_series_path<D: DrawTarget<Color = Rgb565>>(
    points: &[DataPoint],
    viewport: &Viewport,
    style: &SeriesStyle,
    interpolation: InterpolationType,
    marker_fill: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let path = screen_path(points, viewport, interpolation);
    draw_polyline(&path, style, display)?;

    if style.show_points {
        draw_point_markers(points, viewport, style, marker_fill, display)?;
    }

    Ok(())
}

fn draw_polyline<D: DrawTarget<Color = Rgb565>>(
    path: &[Option<Point>],
    style: &SeriesStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    let line_style = PrimitiveStyle::with_stroke(style.color, style.line_width);

    for pair in path.windows(2) {
        if let (Some(start), Some(end)) = (pair[0], pair[1])
            && start != end
        {
            Line::new(start, end).into_styled(line_style).draw(display)?;
        }
    }

    Ok(())
}

fn draw_point_markers<D: DrawTarget<Color = Rgb565>>(
    points: &[DataPoint],
    viewport: &Viewport,
    style: &SeriesStyle,
    fill: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let marker_style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(style.color)
        .stroke_width(1)
        .build();

    for point in points {
        if let Some(center) = viewport.data_to_screen(*point) {
            Circle::with_center(center, POINT_MARKER_DIAMETER_PX)
                .into_styled(marker_style)
                .draw(display)?;
        }
    }

    Ok(())
}

fn collect_linear_screen_points(points: &[DataPoint], viewport: &Viewport) -> Vec<Option<Point>> {
    points
        .iter()
        .map(|point| viewport.data_to_screen(*point))
        .collect()
}

/// Step-after path: hold each value until the next sample's x, then jump
fn collect_stepped_screen_points(points: &[DataPoint], viewport: &Viewport) -> Vec<Option<Point>> {
    let mut path = Vec::with_capacity(points.len() * 2);

    for (i, point) in points.iter().enumerate() {
        path.push(viewport.data_to_screen(*point));

        if let Some(next) = points.get(i + 1) {
            path.push(viewport.data_to_screen(DataPoint::new(next.x, point.y)));
        }
    }

    path
}

fn collect_smooth_screen_points(points: &[DataPoint], viewport: &Viewport) -> Vec<Option<Point>> {
    monotone_points(points, DEFAULT_SMOOTH_SUBDIVISIONS)
        .into_iter()
        .map(|point| viewport.data_to_screen(point))
        .collect()
}

/// Sample a monotone cubic through `points` in data space
///
/// Each interval is split into `subdivisions` steps and the last sample is
/// appended, so every input point appears in the output. Between two
/// samples the curve stays inside their y range.
fn monotone_points(points: &[DataPoint], subdivisions: usize) -> Vec<DataPoint> {
    if points.len() < 3 || subdivisions == 0 {
        return points.to_vec();
    }

    let tangents = monotone_tangents(points);
    let last = points.len() - 1;
    let mut path = Vec::with_capacity(last * subdivisions + 1);
    let step = 1.0 / subdivisions as f32;

    for i in 0..last {
        for j in 0..subdivisions {
            let t = j as f32 * step;
            path.push(hermite_point(points[i], points[i + 1], tangents[i], tangents[i + 1], t));
        }
    }

    path.push(points[last]);
    path
}

/// Tangent (dy/dx) at every point, limited so no interval overshoots
///
/// Interior tangents follow Steffen's method. The end tangents are chosen so
/// the curvature at the ends is zero.
fn monotone_tangents(points: &[DataPoint]) -> Vec<f32> {
    let last = points.len() - 1;
    let mut tangents = Vec::with_capacity(points.len());
    tangents.push(0.0);

    for i in 1..last {
        let (prev, point, next) = (points[i - 1], points[i], points[i + 1]);
        let h0 = point.x - prev.x;
        let h1 = next.x - point.x;
        if h0 <= 0.0 || h1 <= 0.0 {
            tangents.push(0.0);
            continue;
        }

        let s0 = (point.y - prev.y) / h0;
        let s1 = (next.y - point.y) / h1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let limit = libm::fabsf(s0).min(libm::fabsf(s1)).min(0.5 * libm::fabsf(p));
        tangents.push((sign(s0) + sign(s1)) * limit);
    }

    tangents.push(0.0);
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[last] = end_tangent(points[last - 1], points[last], tangents[last - 1]);
    tangents
}

fn end_tangent(a: DataPoint, b: DataPoint, inner: f32) -> f32 {
    let h = b.x - a.x;
    if h > 0.0 {
        (3.0 * (b.y - a.y) / h - inner) / 2.0
    } else {
        inner
    }
}

fn sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Point on the cubic Hermite segment from `a` (t = 0) to `b` (t = 1)
///
/// `ma` and `mb` are tangents in data units (dy/dx); x advances linearly.
fn hermite_point(a: DataPoint, b: DataPoint, ma: f32, mb: f32, t: f32) -> DataPoint {
    let h = b.x - a.x;
    let t2 = t * t;
    let t3 = t2 * t;

    // Hermite basis
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    DataPoint {
        x: a.x + h * t,
        y: h00 * a.y + h10 * h * ma + h01 * b.y + h11 * h * mb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::Rectangle;

    use super::super::viewport::{DataBounds, ViewportPadding};

    fn viewport() -> Viewport {
        Viewport::new(
            DataBounds::new(0.0, 4.0, 0.0, 40.0),
            Rectangle::new(Point::zero(), Size::new(100, 100)),
        )
        .with_padding(ViewportPadding::uniform(10))
    }

    fn zigzag() -> [DataPoint; 5] {
        [
            DataPoint::new(0.0, 10.0),
            DataPoint::new(1.0, 30.0),
            DataPoint::new(2.0, 20.0),
            DataPoint::new(3.0, 35.0),
            DataPoint::new(4.0, 5.0),
        ]
    }

    #[test]
    fn test_stepped_segments_are_axis_aligned() {
        let path = screen_path(&zigzag(), &viewport(), InterpolationType::Stepped);
        assert_eq!(path.len(), 9);

        for pair in path.windows(2) {
            let (a, b) = (pair[0].unwrap(), pair[1].unwrap());
            assert!(a.x == b.x || a.y == b.y, "{:?} -> {:?} is diagonal", a, b);
        }

        // First step holds the first value until the second sample
        assert_eq!(path[1].unwrap().y, path[0].unwrap().y);
        assert_eq!(path[1].unwrap().x, path[2].unwrap().x);
    }

    #[test]
    fn test_monotone_path_passes_through_samples() {
        let vp = viewport();
        let points = zigzag();
        let path = screen_path(&points, &vp, InterpolationType::Monotone);
        assert_eq!(path.len(), 4 * DEFAULT_SMOOTH_SUBDIVISIONS + 1);

        for (i, point) in points.iter().enumerate() {
            assert_eq!(path[i * DEFAULT_SMOOTH_SUBDIVISIONS], vp.data_to_screen(*point));
        }
    }

    #[test]
    fn test_monotone_curve_never_overshoots() {
        let points = zigzag();
        let curve = monotone_points(&points, DEFAULT_SMOOTH_SUBDIVISIONS);

        for (i, pair) in points.windows(2).enumerate() {
            let low = pair[0].y.min(pair[1].y) - 1e-4;
            let high = pair[0].y.max(pair[1].y) + 1e-4;
            let segment = &curve[i * DEFAULT_SMOOTH_SUBDIVISIONS..=(i + 1) * DEFAULT_SMOOTH_SUBDIVISIONS];
            for point in segment {
                assert!(
                    point.y >= low && point.y <= high,
                    "{:?} leaves [{}, {}] between samples {} and {}",
                    point,
                    low,
                    high,
                    i,
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_monotone_keeps_flat_runs_flat() {
        let points = [
            DataPoint::new(0.0, 10.0),
            DataPoint::new(1.0, 20.0),
            DataPoint::new(2.0, 20.0),
            DataPoint::new(3.0, 30.0),
        ];
        let tangents = monotone_tangents(&points);
        assert_eq!(tangents[1], 0.0);
        assert_eq!(tangents[2], 0.0);

        let curve = monotone_points(&points, 4);
        for point in &curve[4..=8] {
            assert!((point.y - 20.0).abs() < 1e-4, "{:?}", point);
        }
    }

    #[test]
    fn test_linear_path_breaks_outside_viewport() {
        let points = [
            DataPoint::new(0.0, 10.0),
            DataPoint::new(1.0, 99.0),
            DataPoint::new(2.0, 20.0),
        ];
        let path = screen_path(&points, &viewport(), InterpolationType::Linear);
        assert!(path[0].is_some());
        assert!(path[1].is_none());
        assert!(path[2].is_some());
    }
}
