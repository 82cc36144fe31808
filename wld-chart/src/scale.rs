use wld_core::point::ChartPoint;

/// Fraction of headroom added above the tallest point.
pub const Y_PADDING_FRACTION: f64 = 0.2;

/// Y-axis maximum when there is nothing to plot.
pub const DEFAULT_Y_MAX: f64 = 5.0;

/// Horizontal pixels reserved for Y-axis labels.
pub const AXIS_LABEL_MARGIN: f64 = 60.0;

/// Extra width past the last point so its label is not clipped.
pub const AXIS_PADDING: f64 = 40.0;

/// Bounds on the horizontal distance between adjacent points.
pub const MIN_POINT_SPACING: f64 = 30.0;
pub const MAX_POINT_SPACING: f64 = 64.0;

/// Y-axis maximum: the tallest value plus padded headroom, rounded up to a
/// whole unit. Non-finite values are ignored; an empty (or all-malformed)
/// sequence gets the fixed default.
pub fn max_y_value(points: &[ChartPoint], padding_fraction: f64) -> f64 {
    let max = points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return DEFAULT_Y_MAX;
    }
    (max * (1.0 + padding_fraction)).ceil()
}

/// [`max_y_value`] with the default headroom fraction.
pub fn default_max_y_value(points: &[ChartPoint]) -> f64 {
    max_y_value(points, Y_PADDING_FRACTION)
}

/// Horizontal distance between adjacent points: an even split of the
/// viewport after the axis margin, clamped to the spacing bounds.
pub fn point_spacing(viewport_width: f64, point_count: usize) -> f64 {
    if point_count == 0 {
        return MAX_POINT_SPACING;
    }
    let available = viewport_width - AXIS_LABEL_MARGIN;
    (available / point_count as f64).clamp(MIN_POINT_SPACING, MAX_POINT_SPACING)
}

/// Total chart width. Exceeds the viewport when the spaced points no
/// longer fit, which is what lets the chart scroll horizontally.
pub fn chart_width(viewport_width: f64, point_count: usize, spacing: f64) -> f64 {
    let content_width = point_count as f64 * spacing + AXIS_PADDING;
    (viewport_width - AXIS_LABEL_MARGIN).max(content_width)
}
