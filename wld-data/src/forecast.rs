//! Appends the forecast continuation to a finished actual-point sequence.
//!
//! The merger assumes the actual sequence spans a single calendar day
//! anchored at `today`; the last actual instant is `(today, last hour)`.
//! Forecast entries at or before that instant duplicate data the chart
//! already shows and are trimmed, which includes stale entries dated
//! before `today`. Entries on a later date are kept regardless of hour
//! (midnight rollover).

use chrono::{Local, NaiveDate};
use wld_core::dates;
use wld_core::point::ChartPoint;
use wld_core::record::RawForecastRecord;

/// Cap on forecast points appended to a chart.
pub const MAX_FORECAST_POINTS: usize = 12;

/// Sort-order offset for forecast points. Actual points are keyed by raw
/// array index (0..N-1), so the offset guarantees every forecast point
/// sorts after every actual point without comparing heterogeneous time
/// representations.
pub const FORECAST_SORT_OFFSET: u32 = 1000;

/// Merge a raw forecast array into the continuation of `actual`, capped at
/// [`MAX_FORECAST_POINTS`] entries, returning one sequence ordered by
/// `sort_order`.
///
/// Without a baseline there is no meaningful continuation: empty actual
/// input yields an empty sequence, and actual points that carry no hour
/// (monthly charts) are returned unchanged.
pub fn merge_forecast(
    actual: &[ChartPoint],
    raw_forecast: &[RawForecastRecord],
    today: NaiveDate,
) -> Vec<ChartPoint> {
    if actual.is_empty() {
        return Vec::new();
    }
    let Some(last_actual_hour) = actual.iter().filter_map(|point| point.hour).max() else {
        return actual.to_vec();
    };

    let mut kept: Vec<&RawForecastRecord> = Vec::new();
    for entry in raw_forecast {
        if !entry.is_valid() {
            log::warn!(
                "dropping malformed forecast entry: date {} hour {}",
                entry.date,
                entry.hour
            );
            continue;
        }
        if (entry.date, entry.hour) <= (today, last_actual_hour) {
            continue;
        }
        kept.push(entry);
    }
    kept.sort_by_key(|entry| (entry.date, entry.hour));
    kept.truncate(MAX_FORECAST_POINTS);

    let mut merged = actual.to_vec();
    for (index, entry) in kept.iter().enumerate() {
        let sort_order = FORECAST_SORT_OFFSET + index as u32;
        let label = dates::format_hour(entry.hour);
        let mut point = ChartPoint::forecast(entry.value(), label, sort_order);
        point.hour = Some(entry.hour);
        point.display_date = Some(dates::long_date(&entry.date));
        point.display_time = Some(dates::format_hour(entry.hour));
        point.next_day = entry.date != today;
        merged.push(point);
    }
    merged.sort_by_key(|point| point.sort_order);
    merged
}

/// [`merge_forecast`] anchored at the local calendar date.
pub fn merge_forecast_today(
    actual: &[ChartPoint],
    raw_forecast: &[RawForecastRecord],
) -> Vec<ChartPoint> {
    merge_forecast(actual, raw_forecast, Local::now().date_naive())
}
