//! Turns an aggregated key series into labelled, render-ready chart points.

use wld_core::dates;
use wld_core::point::ChartPoint;
use wld_core::record::ChartMethod;
use wld_core::time_key::TimeKey;

use crate::aggregate::KeySeries;

/// Build actual-series chart points from an ordered key series.
///
/// `sort_order` is the point's index in the series, which keeps the
/// aggregator's instant ordering. Keys that do not match the requested
/// method are skipped; mixed-method series indicate a caller bug upstream.
/// An empty series yields an empty sequence.
pub fn build_points(series: &KeySeries, method: ChartMethod) -> Vec<ChartPoint> {
    let mut points = Vec::with_capacity(series.len());
    for (key, value) in series.iter() {
        let sort_order = points.len() as u32;
        match (method, key) {
            (ChartMethod::Hourly, TimeKey::Hourly { hour }) => {
                let mut point = ChartPoint::actual(*value, key.to_string(), sort_order);
                point.hour = Some(*hour);
                points.push(point);
            }
            (ChartMethod::Period, TimeKey::Period { date, hour }) => {
                // Two-line label: "2 Mar" over "14:00". Repeated date headers
                // are not suppressed; period charts always show the time row.
                let label = format!(
                    "{}\n{}",
                    dates::short_day_month(date),
                    dates::format_hour(*hour)
                );
                let mut point = ChartPoint::actual(*value, label, sort_order);
                point.hour = Some(*hour);
                point.display_date = Some(dates::long_date(date));
                point.display_time = Some(dates::format_hour(*hour));
                points.push(point);
            }
            (ChartMethod::Monthly, TimeKey::Monthly { .. }) => {
                points.push(ChartPoint::actual(*value, key.to_string(), sort_order));
            }
            (_, key) => {
                log::warn!("skipping {key} key in a {method:?} point build");
            }
        }
    }
    points
}
