//! Chart data pipeline for water-level dashboards.
//!
//! Raw sensor and forecast arrays come in from the fetch layer; a single,
//! chronologically ordered, dual-series (actual + forecast) sequence of
//! [`wld_core::point::ChartPoint`] goes out to the rendering layer.
//!
//! Data flows one way through pure functions:
//! 1. `normalize` extracts `(TimeKey, value)` pairs from the raw shapes.
//! 2. `aggregate` sorts the pairs by represented instant and sums
//!    same-key collisions.
//! 3. `points` turns the ordered series into labelled chart points.
//! 4. `forecast` appends the chronological forecast continuation.
//!
//! No step holds state across invocations or mutates its input.

pub mod aggregate;
pub mod forecast;
pub mod normalize;
pub mod points;

use wld_core::point::ChartPoint;
use wld_core::record::{ChartMethod, RawDayBucket, RawHourlyRecord, RawMonthlyRecord};

/// One day of hourly readings, ready to render.
pub fn hourly_chart_points(records: &[RawHourlyRecord]) -> Vec<ChartPoint> {
    let series = aggregate::aggregate(normalize::normalize_hourly(records));
    points::build_points(&series, ChartMethod::Hourly)
}

/// A multi-day period of readings, ready to render.
pub fn period_chart_points(buckets: &[RawDayBucket]) -> Vec<ChartPoint> {
    let series = aggregate::aggregate(normalize::normalize_period(buckets));
    points::build_points(&series, ChartMethod::Period)
}

/// A year of monthly aggregates, ready to render.
pub fn monthly_chart_points(records: &[RawMonthlyRecord]) -> Vec<ChartPoint> {
    let series = aggregate::aggregate(normalize::normalize_monthly(records));
    points::build_points(&series, ChartMethod::Monthly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_pipeline_orders_by_month() {
        let records = vec![
            RawMonthlyRecord {
                month: 3,
                surface: Some(10.0),
            },
            RawMonthlyRecord {
                month: 1,
                surface: Some(5.0),
            },
        ];
        let points = monthly_chart_points(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Jan");
        assert_eq!(points[0].value, 5.0);
        assert_eq!(points[1].label, "Mar");
        assert_eq!(points[1].value, 10.0);
    }

    #[test]
    fn test_hourly_pipeline_sums_duplicate_hours() {
        let records = vec![
            RawHourlyRecord {
                hour: 8,
                surface: Some(1.5),
                avg_surface: None,
            },
            RawHourlyRecord {
                hour: 8,
                surface: Some(0.5),
                avg_surface: None,
            },
            RawHourlyRecord {
                hour: 9,
                surface: Some(2.0),
                avg_surface: None,
            },
        ];
        let points = hourly_chart_points(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "08:00");
        assert_eq!(points[0].value, 2.0);
        assert!(points[0].is_actual);
        assert_eq!(points[1].label, "09:00");
        assert_eq!(points[1].value, 2.0);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let records = vec![
            RawHourlyRecord {
                hour: 9,
                surface: Some(2.0),
                avg_surface: None,
            },
            RawHourlyRecord {
                hour: 8,
                surface: Some(1.5),
                avg_surface: None,
            },
            RawHourlyRecord {
                hour: 8,
                surface: Some(0.5),
                avg_surface: None,
            },
        ];
        let first = hourly_chart_points(&records);
        let second = hourly_chart_points(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs_yield_empty_outputs() {
        assert!(hourly_chart_points(&[]).is_empty());
        assert!(period_chart_points(&[]).is_empty());
        assert!(monthly_chart_points(&[]).is_empty());
    }
}
