use wld_core::point::ChartPoint;

/// Color class for the line segment between two adjacent chart points.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SegmentClass {
    Actual,
    Forecast,
}

/// Classify every adjacent pair in a point sequence.
///
/// Returns one class per segment, so `len - 1` entries (empty for fewer
/// than two points). A segment entering the forecast series takes the
/// forecast class; a forecast-to-actual segment should not occur in a
/// merged sequence and falls back to the actual class.
pub fn classify_segments(points: &[ChartPoint]) -> Vec<SegmentClass> {
    points
        .windows(2)
        .map(|pair| classify_pair(&pair[0], &pair[1]))
        .collect()
}

/// Color class for the segment from `from` to `to`.
pub fn classify_pair(from: &ChartPoint, to: &ChartPoint) -> SegmentClass {
    if to.is_forecast {
        SegmentClass::Forecast
    } else {
        if from.is_forecast {
            log::warn!(
                "forecast point at sort order {} precedes actual point at {}",
                from.sort_order,
                to.sort_order
            );
        }
        SegmentClass::Actual
    }
}
